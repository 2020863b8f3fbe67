// Taskforge Core - Process configuration domain, resolution and ports
// NO infrastructure dependencies (Hexagonal Architecture)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use application::{Configuration, ConfigurationLoader, SourceRequest};
pub use domain::{ConcurrencyMaintenanceSpec, DispatcherSpec, ExecutionMode, WorkerSpec};
pub use error::{ConfigurationError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
