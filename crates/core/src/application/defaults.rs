// Defaults tables (No magic values)
//
// Every option a raw entry may omit is filled from these constants.
use std::time::Duration;

/// Worker defaults
pub mod worker {
    use super::Duration;

    /// Queue selector when `queues` is omitted (all queues)
    pub const QUEUES: &[&str] = &[crate::domain::ALL_QUEUES];

    /// Sleep between polls when no job was claimed (100ms)
    pub const POLLING_INTERVAL: Duration = Duration::from_millis(100);

    /// Execution threads per worker unit
    pub const THREADS: usize = 5;

    /// Identical units per worker entry
    pub const PROCESSES: usize = 1;
}

/// Dispatcher defaults
pub mod dispatcher {
    use super::Duration;

    /// Scheduled jobs moved to ready per poll
    pub const BATCH_SIZE: usize = 500;

    /// Sleep between polls (1s)
    pub const POLLING_INTERVAL: Duration = Duration::from_secs(1);

    /// Nested `concurrency_maintenance` defaults
    pub mod concurrency_maintenance {
        use super::Duration;

        pub const ENABLED: bool = true;

        /// Interval between expired-lock sweeps (10 minutes)
        pub const INTERVAL: Duration = Duration::from_secs(600);
    }
}

/// Upper bounds on declared sizes
///
/// Keep expansion allocations and the thread-capacity sum well inside `usize`.
pub mod limits {
    /// Execution threads per worker unit
    pub const MAX_THREADS: usize = 1024;

    /// Identical units per worker entry
    pub const MAX_PROCESSES: usize = 256;

    /// Expanded worker units across the whole configuration
    pub const MAX_WORKER_UNITS: usize = 4096;
}
