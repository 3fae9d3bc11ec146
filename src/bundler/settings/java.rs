//! Java compilation and archive contents.

use serde::Deserialize;
use std::path::PathBuf;

/// Java build configuration.
///
/// Maps from the `[java]` table of `bundle.toml`.
///
/// ```toml
/// [java]
/// main_class = "Main"
/// source_dir = "src"
/// classes_dir = "bin"
/// resources = ["notes_rtf"]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JavaSettings {
    /// Fully qualified entry-point class (e.g. `Main`, `com.example.App`).
    ///
    /// The entry-point source file is derived from it: `com.example.App`
    /// compiles `<source_dir>/com/example/App.java`.
    ///
    /// Default: "Main"
    pub main_class: String,

    /// Source root handed to `javac -sourcepath`, relative to the project.
    ///
    /// Default: "src"
    pub source_dir: PathBuf,

    /// Output directory for compiled classes, relative to the project.
    ///
    /// Default: "bin"
    pub classes_dir: PathBuf,

    /// Resource directories under the source root packed into the archive
    /// under their own relative names. Missing ones are created empty.
    ///
    /// Default: none
    pub resources: Vec<PathBuf>,

    /// Extra arguments passed to `javac` before the entry-point file.
    ///
    /// Example: `["--release", "8"]`
    pub javac_args: Vec<String>,

    /// JDK installation whose `bin/` is searched before PATH.
    ///
    /// Default: None (falls back to the `JAVA_HOME` environment variable)
    pub java_home: Option<PathBuf>,

    /// Erase the classes directory before compiling.
    ///
    /// Default: false (the directory is reused)
    pub clean: bool,
}

impl Default for JavaSettings {
    fn default() -> Self {
        Self {
            main_class: "Main".into(),
            source_dir: PathBuf::from("src"),
            classes_dir: PathBuf::from("bin"),
            resources: Vec::new(),
            javac_args: Vec::new(),
            java_home: None,
            clean: false,
        }
    }
}
