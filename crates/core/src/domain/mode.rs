// Execution Mode

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the supervisor runs the resolved workers
///
/// - `Fork`: each worker spec becomes an independent OS-level unit
/// - `Async`: all workers run cooperatively inside a single host process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Fork,
    Async,
}

impl ExecutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Fork => "fork",
            ExecutionMode::Async => "async",
        }
    }

    /// Whether declared `processes` multiplicities are materialized in this mode
    pub fn honors_multiplicity(&self) -> bool {
        matches!(self, ExecutionMode::Fork)
    }
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown execution mode string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown execution mode '{0}' (expected 'fork' or 'async')")]
pub struct ParseExecutionModeError(String);

impl FromStr for ExecutionMode {
    type Err = ParseExecutionModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fork" => Ok(ExecutionMode::Fork),
            "async" => Ok(ExecutionMode::Async),
            _ => Err(ParseExecutionModeError(s.to_string())),
        }
    }
}
