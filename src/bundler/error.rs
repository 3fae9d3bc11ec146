//! Error types for bundling operations.
//!
//! Every failure is terminal for the run that produced it. Variants map onto
//! three families: missing external tools, external tools that ran and failed,
//! and filesystem/environment problems. Pipeline failures carry the [`Stage`]
//! that produced them so the user can tell where the build stopped.

use crate::bundler::Stage;
use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

/// Result type alias for bundling operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while compiling, archiving, or wrapping an application.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required external tool could not be located.
    ///
    /// This is a configuration problem, never a transient one.
    #[error(
        "required tool `{tool}` was not found on PATH{}; install it or configure its location",
        searched_suffix(.searched)
    )]
    ToolNotFound {
        /// Tool name as invoked (e.g. `javac`, `launch4j`)
        tool: String,
        /// Extra directories probed after PATH
        searched: Vec<PathBuf>,
    },

    /// An external tool ran and exited unsuccessfully.
    #[error("{stage} stage failed: `{command}` exited with {}\n{output}", exit_code(.code))]
    ProcessFailed {
        /// Pipeline stage that ran the tool
        stage: Stage,
        /// Command line that was executed
        command: String,
        /// Exit code, if the process was not killed by a signal
        code: Option<i32>,
        /// Diagnostic output captured from the tool
        output: String,
    },

    /// An external tool could not be spawned at all.
    #[error("failed to execute `{command}`: {error}")]
    CommandFailed {
        /// Command that failed to start
        command: String,
        /// Underlying spawn error
        #[source]
        error: std::io::Error,
    },

    /// The entry-point source file is missing from the source tree.
    #[error("entry-point source file not found: {}", .path.display())]
    MissingEntryPoint {
        /// Expected location of the entry-point source
        path: PathBuf,
    },

    /// A filesystem operation failed.
    #[error("{context} ({}): {error}", .path.display())]
    Fs {
        /// What was being attempted
        context: String,
        /// Path the operation targeted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        error: std::io::Error,
    },

    /// Project configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Launcher configuration template failed to render.
    #[error("template error: {0}")]
    Template(String),

    /// Catch-all error with a message.
    #[error("{0}")]
    GenericError(String),
}

impl Error {
    /// Returns the pipeline stage that produced this error, if known.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Error::ProcessFailed { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

fn searched_suffix(searched: &[PathBuf]) -> String {
    if searched.is_empty() {
        return String::new();
    }
    let dirs: Vec<String> = searched.iter().map(|p| p.display().to_string()).collect();
    format!(" or in {}", dirs.join(", "))
}

fn exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Attach a path and description to I/O errors.
pub trait ErrorExt<T> {
    /// Converts an I/O error into [`Error::Fs`] describing `context` at `path`.
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context: context.to_string(),
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Turn an absent value into an error with a human readable message.
pub trait Context<T> {
    /// Converts `None` into [`Error::GenericError`] carrying `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

/// Return early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}
