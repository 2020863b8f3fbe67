// Port Layer - Interfaces for external dependencies

pub mod source_loader;

// Re-exports
pub use source_loader::SourceLoader;
