// Raw (unresolved) configuration source
//
// Permissive intermediate structures: every option is optional, unknown keys are ignored.
// Type normalization and range checks happen in the resolver.

use crate::domain::spec::{SpecKind, ALL_QUEUES};
use crate::error::{ConfigurationError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::debug;

pub const WORKERS_KEY: &str = "workers";
pub const DISPATCHERS_KEY: &str = "dispatchers";

const WORKER_OPTIONS: &[&str] = &["queues", "polling_interval", "threads", "processes"];
const DISPATCHER_OPTIONS: &[&str] = &[
    "batch_size",
    "polling_interval",
    "concurrency_maintenance",
    "concurrency_maintenance_interval",
];

/// Raw source snapshot
///
/// `None` means the key was omitted (or null): no spec of that kind comes from this source.
/// `Some(vec![])` means the key was present but empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSource {
    pub workers: Option<Vec<Value>>,
    pub dispatchers: Option<Vec<Value>>,
}

impl RawSource {
    /// Built-in source used when no configuration exists at all:
    /// one worker on every queue and one dispatcher, both otherwise defaulted
    pub fn fallback() -> Self {
        Self {
            workers: Some(vec![json!({ "queues": [ALL_QUEUES] })]),
            dispatchers: Some(vec![json!({})]),
        }
    }

    /// Split a structured value into worker and dispatcher entry lists
    ///
    /// # Arguments
    /// * `value` - Top-level configuration value (must be an object)
    /// * `origin` - Where the value came from, for error messages
    pub fn from_value(value: &Value, origin: &str) -> Result<Self> {
        let map = value.as_object().ok_or_else(|| {
            ConfigurationError::malformed_source(
                origin,
                format!("expected a table at the top level, found {}", type_name(value)),
            )
        })?;

        Ok(Self {
            workers: entry_list(map, WORKERS_KEY, origin)?,
            dispatchers: entry_list(map, DISPATCHERS_KEY, origin)?,
        })
    }
}

fn entry_list(map: &Map<String, Value>, key: &str, origin: &str) -> Result<Option<Vec<Value>>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(entries)) => Ok(Some(entries.clone())),
        Some(other) => Err(ConfigurationError::malformed_source(
            origin,
            format!("'{}' must be a list, found {}", key, type_name(other)),
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a table",
    }
}

/// `queues` accepts a single name or a list of names
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum QueueSelection {
    One(String),
    Many(Vec<String>),
}

impl QueueSelection {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            QueueSelection::One(queue) => vec![queue],
            QueueSelection::Many(queues) => queues,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawWorkerEntry {
    pub queues: Option<QueueSelection>,
    pub polling_interval: Option<f64>,
    pub threads: Option<i64>,
    pub processes: Option<i64>,
}

impl RawWorkerEntry {
    pub fn parse(index: usize, value: &Value) -> Result<Self> {
        parse_entry(SpecKind::Worker, index, value, WORKER_OPTIONS)
    }
}

/// `concurrency_maintenance` accepts an on/off switch or a table of options
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawConcurrencyMaintenance {
    Toggle(bool),
    Options(RawConcurrencyMaintenanceOptions),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawConcurrencyMaintenanceOptions {
    pub enabled: Option<bool>,
    pub interval: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawDispatcherEntry {
    pub batch_size: Option<i64>,
    pub polling_interval: Option<f64>,
    pub concurrency_maintenance: Option<RawConcurrencyMaintenance>,
    /// Flat form of `concurrency_maintenance.interval`
    pub concurrency_maintenance_interval: Option<f64>,
}

impl RawDispatcherEntry {
    pub fn parse(index: usize, value: &Value) -> Result<Self> {
        parse_entry(SpecKind::Dispatcher, index, value, DISPATCHER_OPTIONS)
    }
}

fn parse_entry<T: DeserializeOwned>(
    kind: SpecKind,
    index: usize,
    value: &Value,
    recognized: &[&str],
) -> Result<T> {
    let map = value.as_object().ok_or_else(|| {
        ConfigurationError::malformed_entry(
            kind,
            index,
            format!("expected a table of options, found {}", type_name(value)),
        )
    })?;

    for key in map.keys().filter(|k| !recognized.contains(&k.as_str())) {
        debug!(kind = %kind, index, key = %key, "Ignoring unrecognized option");
    }

    serde_json::from_value(value.clone())
        .map_err(|e| ConfigurationError::malformed_entry(kind, index, e.to_string()))
}
