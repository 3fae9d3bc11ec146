//! Error types for the command line layer.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all CLI operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Bundler errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::bundler::{Error, Stage};

        match self {
            BundlerError::Bundler(Error::ToolNotFound { tool, .. }) if tool.starts_with("launch4j") => vec![
                "Install Launch4j from https://launch4j.sourceforge.net/".to_string(),
                "Add it to PATH, set LAUNCH4J_HOME, or pass --launch4j-dir".to_string(),
                "Use --jar-only to stop after creating the JAR".to_string(),
            ],
            BundlerError::Bundler(Error::ToolNotFound { .. }) => vec![
                "Install a JDK (javac and jar are required)".to_string(),
                "Add its bin directory to PATH or set JAVA_HOME".to_string(),
            ],
            BundlerError::Bundler(Error::MissingEntryPoint { .. }) => vec![
                "Check [java] main_class and source_dir in bundle.toml".to_string(),
            ],
            BundlerError::Bundler(Error::ProcessFailed { stage: Stage::Compile, .. }) => vec![
                "Fix the compiler errors reported above and re-run".to_string(),
            ],
            BundlerError::Bundler(Error::ProcessFailed { stage: Stage::Wrap, .. }) => vec![
                "Check the Launch4j output above; version bounds and icon paths are common causes"
                    .to_string(),
            ],
            BundlerError::Bundler(Error::InvalidConfig(_)) | BundlerError::Toml(_) => vec![
                "Review bundle.toml and the command line options".to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
