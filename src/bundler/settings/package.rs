//! Package metadata and configuration.

use serde::Deserialize;

/// Package metadata shown to end users.
///
/// Maps from the `[package]` table of `bundle.toml`.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_jar::bundler::PackageSettings;
///
/// let settings = PackageSettings {
///     product_name: "StickyNoteApp".into(),
///     version: "1.2.0".into(),
///     description: "Desktop sticky notes".into(),
/// };
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageSettings {
    /// Product name used for artifact names and the launcher error title.
    ///
    /// Default: empty, which makes the builder fall back to the project
    /// directory name.
    pub product_name: String,

    /// Version string.
    ///
    /// Default: "1.0.0"
    pub version: String,

    /// Brief description of the application.
    pub description: String,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            version: "1.0.0".into(),
            description: String::new(),
        }
    }
}
