// Taskforge Infrastructure - File System Adapters
// Implements: SourceLoader

pub mod file_source_loader;

pub use file_source_loader::{expand_path, FileSourceLoader, SourceFormat};
