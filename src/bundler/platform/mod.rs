//! Pipeline stage implementations.
//!
//! - [`java`] - compilation, manifest generation and archiving with the JDK tools
//! - [`windows`] - native executable wrapping with Launch4j

pub mod java;
pub mod windows;

use serde::Serialize;
use std::fmt;

/// Deliverable produced by the bundler, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    /// Runnable JAR archive with an embedded `Main-Class` manifest.
    Jar,
    /// Native executable wrapping the JAR (Launch4j).
    Exe,
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageType::Jar => write!(f, "jar"),
            PackageType::Exe => write!(f, "exe"),
        }
    }
}
