// Configuration - aggregate root of the resolved process set

use crate::application::expander;
use crate::application::resolver::{DispatcherResolver, SpecResolver, WorkerResolver};
use crate::domain::{DispatcherSpec, ExecutionMode, ProcessSpec, RawSource, WorkerSpec};
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Fully resolved and expanded process configuration
///
/// Immutable once built: the supervisor, workers and reporters read it without locking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Configuration {
    mode: ExecutionMode,
    workers: Vec<WorkerSpec>,
    dispatchers: Vec<DispatcherSpec>,
}

impl Configuration {
    /// Build from a raw source snapshot
    ///
    /// # Arguments
    /// * `mode` - Execution mode (decides whether `processes` is honored)
    /// * `source` - Raw source; `None` uses the built-in fallback
    ///   (one worker on all queues plus one dispatcher)
    ///
    /// # Errors
    /// `MalformedEntry` / `InvalidMultiplicity` for the first offending entry.
    pub fn build(mode: ExecutionMode, source: Option<RawSource>) -> Result<Self> {
        let source = source.unwrap_or_else(RawSource::fallback);

        let declarations = match &source.workers {
            Some(entries) => WorkerResolver::resolve_all(entries)?,
            None => Vec::new(),
        };
        let workers = expander::expand_all(declarations, mode)?;

        let dispatchers = match &source.dispatchers {
            Some(entries) => DispatcherResolver::resolve_all(entries)?,
            None => Vec::new(),
        };

        debug!(
            mode = %mode,
            workers = workers.len(),
            dispatchers = dispatchers.len(),
            "Configuration resolved"
        );

        Ok(Self {
            mode,
            workers,
            dispatchers,
        })
    }

    /// Build from an in-memory structured value, used verbatim
    pub fn from_value(mode: ExecutionMode, value: &Value) -> Result<Self> {
        Self::build(mode, Some(RawSource::from_value(value, "inline")?))
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Expanded worker units, in entry order
    pub fn workers(&self) -> &[WorkerSpec] {
        &self.workers
    }

    pub fn dispatchers(&self) -> &[DispatcherSpec] {
        &self.dispatchers
    }

    /// Every unit the supervisor launches: dispatchers first, then workers
    pub fn processes(&self) -> Vec<ProcessSpec<'_>> {
        self.dispatchers
            .iter()
            .map(ProcessSpec::Dispatcher)
            .chain(self.workers.iter().map(ProcessSpec::Worker))
            .collect()
    }

    /// Total execution threads across all expanded worker units
    ///
    /// Counted once per materialized unit, so a worker entry with
    /// `processes: 3, threads: 5` contributes 15 under `Fork` and 5 under `Async`.
    /// Bounded by `MAX_WORKER_UNITS * MAX_THREADS`, which `build` enforces.
    pub fn total_thread_capacity(&self) -> usize {
        self.workers.iter().map(|w| w.threads).sum()
    }
}
