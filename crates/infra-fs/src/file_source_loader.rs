// File source loader
// Implements: SourceLoader (JSON and TOML files)
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use taskforge_core::error::{ConfigurationError, Result};
use taskforge_core::port::SourceLoader;

/// Expand a leading `~` to the user's home directory
///
/// Paths that are not valid UTF-8 are returned unchanged.
pub fn expand_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    match path.to_str() {
        Some(text) => shellexpand::tilde(text).into_owned().into(),
        None => path.to_path_buf(),
    }
}

/// Configuration file format, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Toml,
}

impl SourceFormat {
    /// `.toml` is TOML; anything else (including no extension) is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => SourceFormat::Toml,
            _ => SourceFormat::Json,
        }
    }

    pub fn parse(&self, contents: &str) -> std::result::Result<Value, String> {
        match self {
            SourceFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            SourceFormat::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
        }
    }
}

/// SourceLoader reading JSON or TOML files
///
/// The file handle lives only for the `read_to_string` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSourceLoader;

impl FileSourceLoader {
    pub fn new() -> Self {
        Self
    }
}

impl SourceLoader for FileSourceLoader {
    fn load(&self, path: &Path) -> Result<Option<Value>> {
        let path = expand_path(path);

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Configuration file not found");
                return Ok(None);
            }
            Err(e) => {
                return Err(ConfigurationError::SourceUnavailable {
                    path,
                    reason: e.to_string(),
                })
            }
        };

        let format = SourceFormat::from_path(&path);
        debug!(path = %path.display(), format = ?format, "Parsing configuration file");

        format
            .parse(&contents)
            .map(Some)
            .map_err(|reason| ConfigurationError::malformed_source(path.display().to_string(), reason))
    }
}
