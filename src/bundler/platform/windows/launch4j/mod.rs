//! Native Windows executable creation with Launch4j.
//!
//! Wraps the runnable JAR in an `.exe` that finds an installed Java runtime
//! matching the configured version range, or sends the user to a download
//! page when none is available. Launch4j runs on Windows, Linux and macOS, so
//! executables can be produced from any host.
//!
//! # Module Organization
//!
//! - `template` - Launch4j XML template
//! - `toolset` - Launch4j location
//! - `config` - configuration generation from settings
//! - `build` - Launch4j execution

mod build;
pub mod config;
mod template;
mod toolset;

use crate::bundler::{
    builder::ToolResolver,
    error::Result,
    settings::Settings,
    utils::fs,
};
use std::path::PathBuf;

/// Bundle the project's archive as a native executable.
///
/// # Process
///
/// 1. Locate Launch4j (PATH, then the configured install directory)
/// 2. Check the archive produced by the archive stage exists
/// 3. Remove the previous executable and launcher log
/// 4. Generate the transient Launch4j configuration
/// 5. Run Launch4j
/// 6. Remove the configuration (guard drop, on every path)
///
/// # Returns
///
/// Absolute path of the generated executable.
pub async fn bundle_project(settings: &Settings, tools: &ToolResolver) -> Result<PathBuf> {
    log::info!("Building native executable for {}", settings.product_name());

    let launch4j = toolset::get_launch4j(settings, tools)?;

    let jar_path = settings.jar_path();
    if !jar_path.is_file() {
        crate::bail!(
            "archive {} does not exist; the archive stage must run first",
            jar_path.display()
        );
    }

    let exe_path = settings.exe_path();
    fs::create_dir_all(settings.output_dir(), false).await?;
    fs::remove_file_if_exists(&exe_path).await?;
    fs::remove_file_if_exists(&settings.launcher_log_path()).await?;

    let config = config::write_config(settings).await?;
    build::run_launch4j(&launch4j, config.path(), settings).await?;
    drop(config);

    if !exe_path.is_file() {
        crate::bail!(
            "Launch4j succeeded but did not create {}",
            exe_path.display()
        );
    }

    log::info!("✓ Created executable: {}", exe_path.display());
    Ok(exe_path)
}
