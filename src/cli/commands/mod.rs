//! Command execution functions for bundler operations.

pub mod bundle;
