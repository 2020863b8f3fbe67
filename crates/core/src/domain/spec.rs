// Resolved Process Specs

use serde::Serialize;
use std::time::Duration;

/// Queue selector matching every queue
pub const ALL_QUEUES: &str = "*";

/// Spec kind (used for error reporting and plan output)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecKind {
    Worker,
    Dispatcher,
}

impl std::fmt::Display for SpecKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecKind::Worker => write!(f, "worker"),
            SpecKind::Dispatcher => write!(f, "dispatcher"),
        }
    }
}

/// One concrete worker unit
///
/// Carries no multiplicity: every value is exactly one unit for the supervisor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerSpec {
    /// Never empty
    pub queues: Vec<String>,
    #[serde(serialize_with = "seconds::serialize")]
    pub polling_interval: Duration,
    pub threads: usize,
}

impl WorkerSpec {
    pub fn processes_all_queues(&self) -> bool {
        self.queues.iter().any(|q| q == ALL_QUEUES)
    }
}

/// A resolved worker entry before count expansion
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerDeclaration {
    pub spec: WorkerSpec,
    /// Declared number of identical units (>= 1)
    pub processes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConcurrencyMaintenanceSpec {
    pub enabled: bool,
    #[serde(serialize_with = "seconds::serialize")]
    pub interval: Duration,
}

/// One concrete dispatcher unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatcherSpec {
    /// Always > 0
    pub batch_size: usize,
    #[serde(serialize_with = "seconds::serialize")]
    pub polling_interval: Duration,
    pub concurrency_maintenance: ConcurrencyMaintenanceSpec,
}

/// Borrowed view over any launchable unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProcessSpec<'a> {
    Worker(&'a WorkerSpec),
    Dispatcher(&'a DispatcherSpec),
}

impl ProcessSpec<'_> {
    pub fn kind(&self) -> SpecKind {
        match self {
            ProcessSpec::Worker(_) => SpecKind::Worker,
            ProcessSpec::Dispatcher(_) => SpecKind::Dispatcher,
        }
    }

    pub fn polling_interval(&self) -> Duration {
        match self {
            ProcessSpec::Worker(w) => w.polling_interval,
            ProcessSpec::Dispatcher(d) => d.polling_interval,
        }
    }
}

/// Durations are written as fractional seconds, the same unit raw sources use
mod seconds {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn worker(queues: &[&str]) -> WorkerSpec {
        WorkerSpec {
            queues: queues.iter().map(|q| q.to_string()).collect(),
            polling_interval: Duration::from_millis(100),
            threads: 5,
        }
    }

    #[test]
    fn test_wildcard_detection() {
        assert!(worker(&["*"]).processes_all_queues());
        assert!(worker(&["background", "*"]).processes_all_queues());
        assert!(!worker(&["background"]).processes_all_queues());
    }

    #[test]
    fn test_durations_serialize_as_seconds() {
        let dispatcher = DispatcherSpec {
            batch_size: 500,
            polling_interval: Duration::from_secs(1),
            concurrency_maintenance: ConcurrencyMaintenanceSpec {
                enabled: true,
                interval: Duration::from_secs(600),
            },
        };

        let value = serde_json::to_value(&dispatcher).unwrap();
        assert_eq!(
            value,
            json!({
                "batch_size": 500,
                "polling_interval": 1.0,
                "concurrency_maintenance": { "enabled": true, "interval": 600.0 }
            })
        );
    }

    #[test]
    fn test_process_spec_kind() {
        let w = worker(&["*"]);
        let view = ProcessSpec::Worker(&w);
        assert_eq!(view.kind(), SpecKind::Worker);
        assert_eq!(view.kind().to_string(), "worker");
        assert_eq!(view.polling_interval(), Duration::from_millis(100));
    }
}
