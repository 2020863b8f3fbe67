//! Logging setup
//!
//! Logs go to stderr so that plan output on stdout stays machine-readable.

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "taskforge=info";

/// Install the global subscriber
///
/// # Environment Variables
///
/// - `TASKFORGE_LOG_FORMAT`: `json` for structured output, anything else for pretty output
/// - `RUST_LOG`: filter directives (default: `taskforge=info`)
pub fn init() -> Result<()> {
    let log_format =
        std::env::var("TASKFORGE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(DEFAULT_FILTER)?,
    };

    match log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()?;
        }
        _ => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()?;
        }
    }

    Ok(())
}
