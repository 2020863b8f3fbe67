// Count Expander - materializes declared worker multiplicity

use crate::application::defaults::limits;
use crate::domain::{ExecutionMode, WorkerDeclaration, WorkerSpec};
use crate::error::{ConfigurationError, Result};
use tracing::info;

/// Expand one worker declaration into concrete units
///
/// - `Fork`: `processes` value copies of the spec
/// - `Async`: exactly one copy; all workers share one host process, so
///   identical copies would only poll the same queues twice
///
/// # Example
/// ```text
/// let units = expand(declaration, ExecutionMode::Fork);
/// assert_eq!(units.len(), declaration.processes);
/// ```
pub fn expand(declaration: WorkerDeclaration, mode: ExecutionMode) -> Vec<WorkerSpec> {
    let WorkerDeclaration { spec, processes } = declaration;

    let count = if mode.honors_multiplicity() {
        processes
    } else {
        if processes > 1 {
            info!(
                mode = %mode,
                processes,
                queues = ?spec.queues,
                "Ignoring processes option in this mode, running a single worker"
            );
        }
        1
    };

    vec![spec; count]
}

/// Expand every declaration in order, keeping each entry's copies contiguous
///
/// # Errors
/// `InvalidMultiplicity` for the entry that pushes the unit count past
/// `limits::MAX_WORKER_UNITS`; nothing is allocated for that entry.
pub fn expand_all(
    declarations: impl IntoIterator<Item = WorkerDeclaration>,
    mode: ExecutionMode,
) -> Result<Vec<WorkerSpec>> {
    let mut units = Vec::new();

    for (index, declaration) in declarations.into_iter().enumerate() {
        let count = if mode.honors_multiplicity() {
            declaration.processes
        } else {
            1
        };
        if units.len() + count > limits::MAX_WORKER_UNITS {
            return Err(ConfigurationError::invalid_multiplicity(
                index,
                declaration.processes as i64,
                format!(
                    "configuration would exceed {} worker units",
                    limits::MAX_WORKER_UNITS
                ),
            ));
        }
        units.extend(expand(declaration, mode));
    }

    Ok(units)
}
