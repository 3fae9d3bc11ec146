//! Java application bundler producing runnable JARs and native launchers
//!
//! This library compiles a Java source tree, packs it into a runnable JAR
//! with an embedded `Main-Class` manifest and resource directories, then wraps
//! the JAR into a native executable with Launch4j.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
