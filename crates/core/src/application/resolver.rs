// Spec Resolver - merges raw entries with the defaults tables

use crate::application::defaults::{self, limits};
use crate::domain::{
    ConcurrencyMaintenanceSpec, DispatcherSpec, RawConcurrencyMaintenance, RawDispatcherEntry,
    RawWorkerEntry, SpecKind, WorkerDeclaration, WorkerSpec,
};
use crate::error::{ConfigurationError, Result};
use serde_json::Value;
use std::time::Duration;

/// Resolves one kind of raw entry into a fully-populated spec
///
/// Every recognized option ends up set: from the raw entry when supplied,
/// from the defaults table otherwise.
pub trait SpecResolver {
    type Output;

    const KIND: SpecKind;

    /// Resolve the entry at `index` of its list
    fn resolve(index: usize, raw: &Value) -> Result<Self::Output>;

    /// Resolve every entry, preserving order; fails on the first bad entry
    fn resolve_all(entries: &[Value]) -> Result<Vec<Self::Output>> {
        entries
            .iter()
            .enumerate()
            .map(|(index, raw)| Self::resolve(index, raw))
            .collect()
    }
}

pub struct WorkerResolver;

impl SpecResolver for WorkerResolver {
    type Output = WorkerDeclaration;

    const KIND: SpecKind = SpecKind::Worker;

    fn resolve(index: usize, raw: &Value) -> Result<WorkerDeclaration> {
        let entry = RawWorkerEntry::parse(index, raw)?;

        let queues = match entry.queues {
            Some(selection) => selection.into_vec(),
            None => defaults::worker::QUEUES.iter().map(|q| q.to_string()).collect(),
        };
        if queues.is_empty() {
            return Err(ConfigurationError::malformed_entry(
                Self::KIND,
                index,
                "queues must name at least one queue",
            ));
        }

        let polling_interval = entry
            .polling_interval
            .map(|secs| seconds(Self::KIND, index, "polling_interval", secs))
            .transpose()?
            .unwrap_or(defaults::worker::POLLING_INTERVAL);

        let threads = entry
            .threads
            .map(|n| positive(Self::KIND, index, "threads", n))
            .transpose()?
            .unwrap_or(defaults::worker::THREADS);
        if threads > limits::MAX_THREADS {
            return Err(ConfigurationError::malformed_entry(
                Self::KIND,
                index,
                format!("threads must be at most {}, got {threads}", limits::MAX_THREADS),
            ));
        }

        let processes = match entry.processes {
            None => defaults::worker::PROCESSES,
            Some(n) if n < 1 => {
                return Err(ConfigurationError::invalid_multiplicity(
                    index,
                    n,
                    "must be at least 1",
                ))
            }
            Some(n) => match usize::try_from(n) {
                Ok(processes) if processes <= limits::MAX_PROCESSES => processes,
                _ => {
                    return Err(ConfigurationError::invalid_multiplicity(
                        index,
                        n,
                        format!("must be at most {}", limits::MAX_PROCESSES),
                    ))
                }
            },
        };

        Ok(WorkerDeclaration {
            spec: WorkerSpec {
                queues,
                polling_interval,
                threads,
            },
            processes,
        })
    }
}

pub struct DispatcherResolver;

impl SpecResolver for DispatcherResolver {
    type Output = DispatcherSpec;

    const KIND: SpecKind = SpecKind::Dispatcher;

    fn resolve(index: usize, raw: &Value) -> Result<DispatcherSpec> {
        let entry = RawDispatcherEntry::parse(index, raw)?;

        let batch_size = entry
            .batch_size
            .map(|n| positive(Self::KIND, index, "batch_size", n))
            .transpose()?
            .unwrap_or(defaults::dispatcher::BATCH_SIZE);

        let polling_interval = entry
            .polling_interval
            .map(|secs| seconds(Self::KIND, index, "polling_interval", secs))
            .transpose()?
            .unwrap_or(defaults::dispatcher::POLLING_INTERVAL);

        let (enabled, nested_interval) = match entry.concurrency_maintenance {
            None => (None, None),
            Some(RawConcurrencyMaintenance::Toggle(enabled)) => (Some(enabled), None),
            Some(RawConcurrencyMaintenance::Options(options)) => (options.enabled, options.interval),
        };

        let interval = nested_interval
            .or(entry.concurrency_maintenance_interval)
            .map(|secs| seconds(Self::KIND, index, "concurrency_maintenance.interval", secs))
            .transpose()?
            .unwrap_or(defaults::dispatcher::concurrency_maintenance::INTERVAL);

        Ok(DispatcherSpec {
            batch_size,
            polling_interval,
            concurrency_maintenance: ConcurrencyMaintenanceSpec {
                enabled: enabled.unwrap_or(defaults::dispatcher::concurrency_maintenance::ENABLED),
                interval,
            },
        })
    }
}

fn seconds(kind: SpecKind, index: usize, option: &str, secs: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(secs).map_err(|_| {
        ConfigurationError::malformed_entry(
            kind,
            index,
            format!("{option} must be a non-negative number of seconds, got {secs}"),
        )
    })
}

fn positive(kind: SpecKind, index: usize, option: &str, n: i64) -> Result<usize> {
    match usize::try_from(n) {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigurationError::malformed_entry(
            kind,
            index,
            format!("{option} must be at least 1, got {n}"),
        )),
    }
}
