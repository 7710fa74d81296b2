//! # restful-objects CLI
//!
//! Command-line entry point for running harness scenarios outside of
//! `cargo test`, e.g. as a smoke check against a deployment.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::runner::{Outcome, RunSummary, ScenarioRunner};
use crate::scenario::Scenario;

// ============================================================================
// CLI Structure
// ============================================================================

/// restful-objects - scenario harness for the object API
#[derive(Parser, Debug)]
#[command(name = "restful-objects")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run correctness scenarios against the restful-api.dev object API")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "RESTFUL_OBJECTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Logging level, used when RUST_LOG is not set
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Enable JSON logging
    #[arg(long)]
    pub json_logs: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run scenarios and print a report
    Run {
        /// Scenario to run; repeat to select several. Defaults to all.
        #[arg(short, long, value_enum)]
        scenario: Vec<Scenario>,

        /// Override the configured base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List the available scenarios
    Scenarios,
}

/// Report output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// One JSON document
    Json,
}

// ============================================================================
// CLI Error Types
// ============================================================================

/// CLI-specific errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Harness(#[from] HarnessError),

    #[error("{failed} of {total} scenarios failed")]
    ScenariosFailed { failed: usize, total: usize },

    #[error("Logging initialization failed: {message}")]
    Logging { message: String },

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ScenariosFailed { .. } => 1,
            Self::Harness(_) => 2,
            Self::Logging { .. } => 3,
            Self::Io(_) | Self::Serialization(_) => 4,
        }
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Parse arguments, initialize logging and execute the selected command.
pub async fn run_cli() -> Result<(), CliError> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Run {
            scenario,
            base_url,
            format,
        } => {
            let config = resolve_run_config(cli.config.as_deref(), base_url)?;

            let scenarios = if scenario.is_empty() {
                Scenario::ALL.to_vec()
            } else {
                scenario
            };

            execute_run_command(&config, &scenarios, format, &mut out).await
        }
        Commands::Scenarios => execute_scenarios_command(&mut out),
    }
}

/// Load the layered configuration and apply a `--base-url` override.
///
/// The override is validated like any other configured value.
pub fn resolve_run_config(
    config_path: Option<&Path>,
    base_url: Option<String>,
) -> Result<HarnessConfig, CliError> {
    let mut config = HarnessConfig::load(config_path)?;
    if let Some(base_url) = base_url {
        info!(base_url = %base_url, "Overriding configured base URL");
        config.base_url = base_url;
        config.validate()?;
    }
    Ok(config)
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `--log-level` when both are set.
pub fn initialize_logging(cli: &Cli) -> Result<(), CliError> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&cli.log_level))
        .map_err(|e| CliError::Logging {
            message: format!("invalid log level '{}': {}", cli.log_level, e),
        })?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = if cli.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    result.map_err(|e| CliError::Logging {
        message: e.to_string(),
    })
}

/// Run `scenarios` and write the report to `out`.
///
/// # Errors
///
/// Returns `CliError::ScenariosFailed` after writing the report if any
/// scenario failed.
pub async fn execute_run_command(
    config: &HarnessConfig,
    scenarios: &[Scenario],
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), CliError> {
    info!(base_url = %config.base_url, count = scenarios.len(), "Starting scenario run");

    let runner = ScenarioRunner::new(config);
    let summary = runner.run_all(scenarios).await;

    write_summary(&summary, format, out)?;

    if summary.all_passed() {
        Ok(())
    } else {
        Err(CliError::ScenariosFailed {
            failed: summary.failed(),
            total: summary.reports().len(),
        })
    }
}

/// Write the scenario list to `out`.
pub fn execute_scenarios_command(out: &mut impl Write) -> Result<(), CliError> {
    for scenario in Scenario::ALL {
        writeln!(out, "{:<12} {}", scenario.name(), scenario.description())?;
    }
    Ok(())
}

/// Render a run summary in the requested format.
pub fn write_summary(
    summary: &RunSummary,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            for report in summary.reports() {
                match report.outcome() {
                    Outcome::Passed => writeln!(
                        out,
                        "PASS {:<12} ({} ms)",
                        report.scenario().name(),
                        report.elapsed().as_millis()
                    )?,
                    Outcome::Failed { reason } => writeln!(
                        out,
                        "FAIL {:<12} ({} ms): {}",
                        report.scenario().name(),
                        report.elapsed().as_millis(),
                        reason
                    )?,
                }
            }
            writeln!(
                out,
                "{} passed, {} failed",
                summary.passed(),
                summary.failed()
            )?;
        }
        OutputFormat::Json => {
            let records: Vec<_> = summary.reports().iter().map(|r| r.record()).collect();
            let document = serde_json::json!({
                "passed": summary.passed(),
                "failed": summary.failed(),
                "scenarios": records,
            });
            serde_json::to_writer_pretty(&mut *out, &document)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
