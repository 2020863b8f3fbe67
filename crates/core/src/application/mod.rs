// Application Layer - Resolution use cases

pub mod configuration;
pub mod defaults;
pub mod expander;
pub mod loader;
pub mod resolver;

// Re-exports
pub use configuration::Configuration;
pub use loader::{ConfigurationLoader, SourceRequest, DEFAULT_CONFIG_FILE_PATH};
pub use resolver::{DispatcherResolver, SpecResolver, WorkerResolver};
