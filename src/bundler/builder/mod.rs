//! Bundle orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator that walks the
//! pipeline stages in order and reports the produced artifacts.
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum calculation for artifacts
//! - [`orchestrator`] - Main [`Bundler`] struct and the stage sequence
//! - [`state`] - Pipeline stages and run state machine
//! - [`tool_detection`] - External tool resolution

mod checksum;
mod orchestrator;
mod state;
mod tool_detection;

pub use orchestrator::Bundler;
pub use state::{BuildState, Stage};
pub use tool_detection::{LAUNCH4J_TOOL, ToolResolver};
