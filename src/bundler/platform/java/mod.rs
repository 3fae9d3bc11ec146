//! Runnable JAR creation with the JDK command line tools.
//!
//! # Module Organization
//!
//! - `compile` - `javac` execution into the classes directory
//! - `manifest` - transient `Main-Class` manifest
//! - `archive` - `jar` execution producing the distributable archive

pub mod archive;
pub mod compile;
pub mod manifest;
