//! Project file (`bundle.toml`) loading.
//!
//! Every key is optional. Relative paths are resolved against the project
//! directory, even when the file itself lives elsewhere.
//!
//! ```toml
//! [package]
//! product_name = "StickyNoteApp"
//!
//! [java]
//! main_class = "Main"
//! resources = ["notes_rtf"]
//!
//! [launcher]
//! min_version = "1.8.0"
//! ```

use crate::bundler::{JavaSettings, LauncherSettings, OutputSettings, PackageSettings};
use crate::error::{BundlerError, CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default project file name, looked up in the project directory.
pub const PROJECT_FILE_NAME: &str = "bundle.toml";

/// Parsed project file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectManifest {
    /// `[package]` table
    pub package: PackageSettings,

    /// `[java]` table
    pub java: JavaSettings,

    /// `[output]` table
    pub output: OutputSettings,

    /// `[launcher]` table
    pub launcher: LauncherSettings,
}

/// Load the project file.
///
/// With `explicit` set, that file must exist. Otherwise
/// `<project_dir>/bundle.toml` is used when present and defaults apply when it
/// is not.
pub async fn load_project(project_dir: &Path, explicit: Option<&Path>) -> Result<ProjectManifest> {
    let path: PathBuf = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(BundlerError::Cli(CliError::InvalidArguments {
                    reason: format!("Config file does not exist: {}", path.display()),
                }));
            }
            path.to_path_buf()
        }
        None => {
            let path = project_dir.join(PROJECT_FILE_NAME);
            if !path.is_file() {
                log::debug!("No {} in {}; using defaults", PROJECT_FILE_NAME, project_dir.display());
                return Ok(ProjectManifest::default());
            }
            path
        }
    };

    let text = tokio::fs::read_to_string(&path).await.map_err(|e| {
        BundlerError::Cli(CliError::ExecutionFailed {
            command: "read_project_file".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;

    log::debug!("Loaded project file {}", path.display());
    parse_project(&text)
}

/// Parse project file contents.
pub fn parse_project(text: &str) -> Result<ProjectManifest> {
    Ok(toml::from_str(text)?)
}
