//! Command line interface for the JAR bundler.
//!
//! This module provides argument parsing, logging setup, command execution
//! and user feedback.

mod args;
pub mod commands;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::error::{CliError, Result};

/// Main CLI entry point
///
/// Returns the process exit code: 0 when every requested artifact was
/// produced. Failures are returned as errors and map to exit code 1.
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    init_logging(&args);

    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let runtime_config = RuntimeConfig::from(&args);
    commands::bundle::execute(&args, &runtime_config).await
}

/// Initialize the `log` backend.
///
/// `RUST_LOG` wins; otherwise the level follows `--verbose` / `--quiet`.
/// Log records go to stderr, so tool output stays visible next to progress
/// messages without mixing into `--json` output.
fn init_logging(args: &Args) {
    let default_level = if args.verbose {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
