// Source Loader Port (raw configuration acquisition)
use crate::error::Result;
use serde_json::Value;
use std::path::Path;

/// Reads and parses a raw configuration source stored at a path
///
/// Implementations must distinguish "nothing there" (`Ok(None)`) from
/// "there but unusable" (`Err`): a missing default file triggers the built-in
/// fallback, an unparseable one aborts startup.
pub trait SourceLoader: Send + Sync {
    /// Load the structured value stored at `path`
    ///
    /// # Returns
    /// - `Ok(Some(value))` - Source found and parsed
    /// - `Ok(None)` - No source exists at `path`
    /// - `Err(MalformedSource | SourceUnavailable)` - Source exists but cannot be used
    fn load(&self, path: &Path) -> Result<Option<Value>>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory SourceLoader keyed by path
    #[derive(Default)]
    pub struct InMemorySourceLoader {
        sources: HashMap<PathBuf, Value>,
        loads: AtomicUsize,
    }

    impl InMemorySourceLoader {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_source(mut self, path: impl Into<PathBuf>, value: Value) -> Self {
            self.sources.insert(path.into(), value);
            self
        }

        /// Number of `load` calls so far
        pub fn load_count(&self) -> usize {
            self.loads.load(Ordering::SeqCst)
        }
    }

    impl SourceLoader for InMemorySourceLoader {
        fn load(&self, path: &Path) -> Result<Option<Value>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(self.sources.get(path).cloned())
        }
    }
}
