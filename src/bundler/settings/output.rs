//! Deliverable locations.

use serde::Deserialize;
use std::path::PathBuf;

/// Where the archive and the native executable are written.
///
/// Maps from the `[output]` table of `bundle.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    /// Output directory, relative to the project.
    ///
    /// Default: "dist"
    pub directory: PathBuf,

    /// Archive file name.
    ///
    /// Default: None (`<product_name>.jar`)
    pub jar_name: Option<String>,

    /// Native executable file name.
    ///
    /// Default: None (`<product_name>.exe`)
    pub exe_name: Option<String>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("dist"),
            jar_name: None,
            exe_name: None,
        }
    }
}
