//! Taskforge CLI - resolves the worker/dispatcher configuration
//! and shows what the supervisor would launch

mod logging;
mod plan;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::sync::Arc;
use tracing::info;

use taskforge_core::application::DEFAULT_CONFIG_FILE_PATH;
use taskforge_core::{Configuration, ConfigurationLoader, ExecutionMode, SourceRequest};
use taskforge_infra_fs::{expand_path, FileSourceLoader};

#[derive(Parser)]
#[command(name = "taskforge")]
#[command(about = "Taskforge process configuration", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the configuration and list every process to launch
    Plan {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Resolve the configuration and report whether it is valid
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Execution mode (fork or async)
    #[arg(short, long, env = "TASKFORGE_MODE", default_value = "fork")]
    mode: ExecutionMode,

    /// Configuration file (JSON or TOML); missing file is an error
    ///
    /// Without it, the default file is used if present, built-in defaults otherwise.
    #[arg(short, long, env = "TASKFORGE_CONFIG")]
    config: Option<String>,

    /// Default configuration file probed when --config is not given
    #[arg(long, default_value = DEFAULT_CONFIG_FILE_PATH)]
    default_config: String,

    /// Environment section to select from the configuration (e.g. production)
    #[arg(short, long, env = "TASKFORGE_ENV")]
    environment: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

impl SourceArgs {
    fn load(&self) -> Result<Configuration> {
        let mut loader = ConfigurationLoader::new(Arc::new(FileSourceLoader::new()))
            .with_default_path(expand_path(&self.default_config));
        if let Some(environment) = &self.environment {
            loader = loader.with_environment(environment.clone());
        }

        let request = match &self.config {
            Some(path) => SourceRequest::File(expand_path(path)),
            None => SourceRequest::Default,
        };

        let config = loader
            .load(self.mode, request)
            .context("Failed to resolve process configuration")?;

        info!(
            mode = %config.mode(),
            workers = config.workers().len(),
            dispatchers = config.dispatchers().len(),
            threads = config.total_thread_capacity(),
            "Configuration loaded"
        );

        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init()?;

    match cli.command {
        Commands::Plan { source, format } => {
            let config = source.load()?;

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&config)?);
                }
                OutputFormat::Table => {
                    println!(
                        "{} {}",
                        "Process plan".cyan().bold(),
                        format!("(mode: {})", config.mode()).dimmed()
                    );
                    println!();
                    println!("{}", plan::table(&config));
                    println!();
                    println!(
                        "  {} {}",
                        "Total worker threads:".bold(),
                        config.total_thread_capacity()
                    );
                }
            }
        }

        Commands::Check { source } => {
            let config = source.load()?;

            println!(
                "{}",
                format!(
                    "✓ Configuration OK: {} workers, {} dispatchers, {} worker threads",
                    config.workers().len(),
                    config.dispatchers().len(),
                    config.total_thread_capacity()
                )
                .green()
                .bold()
            );
        }
    }

    Ok(())
}
