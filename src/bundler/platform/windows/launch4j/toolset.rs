//! Launch4j toolset location.

use crate::bundler::{
    builder::{LAUNCH4J_TOOL, ToolResolver},
    error::Result,
    settings::Settings,
};
use std::path::PathBuf;

/// Locate the Launch4j command line tool.
///
/// Searches PATH first, then the configured installation directory.
/// Absence is a configuration error and is reported immediately.
pub fn get_launch4j(settings: &Settings, tools: &ToolResolver) -> Result<PathBuf> {
    let install_dir = settings.launcher().install_dir.as_deref();
    tools.resolve(LAUNCH4J_TOOL, install_dir)
}
