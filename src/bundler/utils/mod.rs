//! Shared helpers for bundling stages.

pub mod fs;
pub mod process;
