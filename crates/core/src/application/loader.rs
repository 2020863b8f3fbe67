// Configuration Loader - raw source acquisition use case

use crate::application::Configuration;
use crate::domain::{ExecutionMode, RawSource};
use crate::error::{ConfigurationError, Result};
use crate::port::SourceLoader;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Location probed when no source is requested explicitly
pub const DEFAULT_CONFIG_FILE_PATH: &str = "config/taskforge.json";

/// Where the raw configuration comes from
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SourceRequest {
    /// In-memory value, used verbatim
    Inline(Value),
    /// Explicit file; missing is an error
    File(PathBuf),
    /// Default file; missing falls back to the built-in source
    #[default]
    Default,
}

/// Configuration Loader
///
/// Acquires the raw source through a `SourceLoader` and hands it to `Configuration::build`.
pub struct ConfigurationLoader {
    source_loader: Arc<dyn SourceLoader>,
    default_path: PathBuf,
    environment: Option<String>,
}

impl ConfigurationLoader {
    pub fn new(source_loader: Arc<dyn SourceLoader>) -> Self {
        Self {
            source_loader,
            default_path: PathBuf::from(DEFAULT_CONFIG_FILE_PATH),
            environment: None,
        }
    }

    /// Override the path probed for `SourceRequest::Default`
    pub fn with_default_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_path = path.into();
        self
    }

    /// Select a top-level section by environment name when the source has one
    ///
    /// # Example
    /// ```text
    /// // { "production": { "workers": [...] }, "development": { ... } }
    /// let loader = ConfigurationLoader::new(fs).with_environment("production");
    /// ```
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    /// Resolve and expand the requested source
    pub fn load(&self, mode: ExecutionMode, request: SourceRequest) -> Result<Configuration> {
        let source = self.acquire(request)?;
        Configuration::build(mode, source)
    }

    /// Acquire the raw source
    ///
    /// Returns `None` only when the default file does not exist,
    /// which `Configuration::build` answers with the built-in fallback.
    pub fn acquire(&self, request: SourceRequest) -> Result<Option<RawSource>> {
        match request {
            SourceRequest::Inline(value) => {
                let value = self.select_environment(value);
                RawSource::from_value(&value, "inline").map(Some)
            }
            SourceRequest::File(path) => match self.source_loader.load(&path)? {
                Some(value) => self.raw_from_file(value, &path).map(Some),
                None => Err(ConfigurationError::SourceUnavailable {
                    path,
                    reason: "file not found".to_string(),
                }),
            },
            SourceRequest::Default => match self.source_loader.load(&self.default_path)? {
                Some(value) => self.raw_from_file(value, &self.default_path).map(Some),
                None => {
                    info!(
                        path = %self.default_path.display(),
                        "No configuration file found, using built-in defaults"
                    );
                    Ok(None)
                }
            },
        }
    }

    fn raw_from_file(&self, value: Value, path: &Path) -> Result<RawSource> {
        debug!(path = %path.display(), "Using configuration file");
        let value = self.select_environment(value);
        RawSource::from_value(&value, &path.display().to_string())
    }

    fn select_environment(&self, mut value: Value) -> Value {
        let Some(environment) = self.environment.as_deref() else {
            return value;
        };

        if value.get(environment).is_some_and(Value::is_object) {
            debug!(environment, "Using environment section");
            return value[environment].take();
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::source_loader::mocks::InMemorySourceLoader;
    use serde_json::json;

    fn loader_with(path: &str, value: Value) -> Arc<InMemorySourceLoader> {
        Arc::new(InMemorySourceLoader::new().with_source(path, value))
    }

    #[test]
    fn test_missing_default_file_uses_fallback() {
        let loader = ConfigurationLoader::new(Arc::new(InMemorySourceLoader::new()))
            .with_default_path("non/existent/path");

        assert_eq!(loader.acquire(SourceRequest::Default).unwrap(), None);

        let config = loader.load(ExecutionMode::Fork, SourceRequest::Default).unwrap();
        assert_eq!(config.workers().len(), 1);
        assert_eq!(config.dispatchers().len(), 1);
    }

    #[test]
    fn test_default_file_is_read_when_present() {
        let fs = loader_with(
            DEFAULT_CONFIG_FILE_PATH,
            json!({ "workers": [{ "queues": "background" }, { "queues": "real_time" }] }),
        );
        let loader = ConfigurationLoader::new(fs.clone());

        let config = loader.load(ExecutionMode::Fork, SourceRequest::Default).unwrap();
        assert_eq!(config.workers().len(), 2);
        assert!(config.dispatchers().is_empty());
        assert_eq!(fs.load_count(), 1);
    }

    #[test]
    fn test_missing_explicit_file_is_unavailable() {
        let loader = ConfigurationLoader::new(Arc::new(InMemorySourceLoader::new()));

        let err = loader
            .load(ExecutionMode::Fork, SourceRequest::File("config/missing.json".into()))
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_inline_source_skips_loader() {
        let fs = Arc::new(InMemorySourceLoader::new());
        let loader = ConfigurationLoader::new(fs.clone());

        let config = loader
            .load(
                ExecutionMode::Fork,
                SourceRequest::Inline(json!({ "dispatchers": [{ "batch_size": 100 }] })),
            )
            .unwrap();

        assert_eq!(config.dispatchers()[0].batch_size, 100);
        assert_eq!(fs.load_count(), 0);
    }

    #[test]
    fn test_environment_section_is_selected() {
        let fs = loader_with(
            "config/queue.json",
            json!({
                "development": { "workers": [{ "threads": 1 }] },
                "production": { "workers": [{ "threads": 10, "processes": 2 }] }
            }),
        );
        let loader = ConfigurationLoader::new(fs).with_environment("production");

        let config = loader
            .load(ExecutionMode::Fork, SourceRequest::File("config/queue.json".into()))
            .unwrap();
        assert_eq!(config.total_thread_capacity(), 20);
    }

    #[test]
    fn test_unknown_environment_uses_whole_source() {
        let loader = ConfigurationLoader::new(Arc::new(InMemorySourceLoader::new()))
            .with_environment("staging");

        let config = loader
            .load(
                ExecutionMode::Fork,
                SourceRequest::Inline(json!({ "workers": [{}], "production": {} })),
            )
            .unwrap();
        assert_eq!(config.workers().len(), 1);
    }
}
