// Central Error Type for configuration resolution

use crate::domain::SpecKind;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration construction error
///
/// Every variant is fatal: a `Configuration` is either fully resolved or not built at all.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// An explicitly requested source could not be read.
    /// A missing default file is not an error (the built-in fallback applies).
    #[error("Configuration source unavailable: {path}: {reason}")]
    SourceUnavailable { path: PathBuf, reason: String },

    #[error("Malformed configuration source ({origin}): {reason}")]
    MalformedSource { origin: String, reason: String },

    #[error("Malformed {kind} entry #{index}: {reason}")]
    MalformedEntry {
        kind: SpecKind,
        index: usize,
        reason: String,
    },

    #[error("Invalid multiplicity for worker entry #{index}: processes = {processes} ({reason})")]
    InvalidMultiplicity {
        index: usize,
        processes: i64,
        reason: String,
    },
}

impl ConfigurationError {
    pub fn malformed_entry(kind: SpecKind, index: usize, reason: impl Into<String>) -> Self {
        ConfigurationError::MalformedEntry {
            kind,
            index,
            reason: reason.into(),
        }
    }

    pub fn invalid_multiplicity(index: usize, processes: i64, reason: impl Into<String>) -> Self {
        ConfigurationError::InvalidMultiplicity {
            index,
            processes,
            reason: reason.into(),
        }
    }

    pub fn malformed_source(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigurationError::MalformedSource {
            origin: origin.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias using ConfigurationError
pub type Result<T> = std::result::Result<T, ConfigurationError>;
