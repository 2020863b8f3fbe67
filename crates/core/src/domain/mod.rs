// Domain Layer - Execution modes, raw sources and resolved specs

pub mod mode;
pub mod raw;
pub mod spec;

// Re-exports
pub use mode::{ExecutionMode, ParseExecutionModeError};
pub use raw::{
    QueueSelection, RawConcurrencyMaintenance, RawConcurrencyMaintenanceOptions,
    RawDispatcherEntry, RawSource, RawWorkerEntry,
};
pub use spec::{
    ConcurrencyMaintenanceSpec, DispatcherSpec, ProcessSpec, SpecKind, WorkerDeclaration,
    WorkerSpec, ALL_QUEUES,
};
