//! Core Settings struct and implementations.

use super::{JavaSettings, LauncherSettings, PackageSettings};
use crate::bundler::platform::PackageType;
use std::path::{Path, PathBuf};

/// File name of the transient JAR manifest, written to the project root.
pub const MANIFEST_FILE_NAME: &str = "manifest.txt";

/// File name of the transient Launch4j configuration, written to the project root.
pub const LAUNCHER_CONFIG_FILE_NAME: &str = "launch4j_config.xml";

/// File name of the launcher's runtime log, written next to the executable.
pub const LAUNCHER_LOG_FILE_NAME: &str = "launch4j.log";

/// Resolved settings for a bundling run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder). Every path
/// returned by this type is absolute, so external tools behave the same no
/// matter which working directory they are started from.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Package metadata with the product name filled in.
    package: PackageSettings,

    /// Java build settings with paths made absolute.
    java: JavaSettings,

    /// Launcher settings with version bounds normalized.
    launcher: LauncherSettings,

    /// Absolute project root.
    project_dir: PathBuf,

    /// Absolute output directory.
    output_dir: PathBuf,

    /// Archive file name.
    jar_name: String,

    /// Executable file name.
    exe_name: String,

    /// Deliverables to produce, in pipeline order.
    package_types: Vec<PackageType>,
}

impl Settings {
    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.package.product_name
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.package.version
    }

    /// Returns the package description.
    pub fn description(&self) -> &str {
        &self.package.description
    }

    /// Returns the absolute project root.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Returns the entry-point class name.
    pub fn main_class(&self) -> &str {
        &self.java.main_class
    }

    /// Returns the absolute source root.
    pub fn source_root(&self) -> &Path {
        &self.java.source_dir
    }

    /// Returns the absolute path of the entry-point source file.
    ///
    /// `com.example.App` maps to `<source_root>/com/example/App.java`.
    pub fn entry_source_file(&self) -> PathBuf {
        let mut path = self.java.source_dir.clone();
        for segment in self.java.main_class.split('.') {
            path.push(segment);
        }
        path.set_extension("java");
        path
    }

    /// Returns the absolute classes output directory.
    pub fn classes_dir(&self) -> &Path {
        &self.java.classes_dir
    }

    /// Whether the classes directory is erased before compiling.
    pub fn clean_classes(&self) -> bool {
        self.java.clean
    }

    /// Returns resource directory names, relative to the source root.
    pub fn resource_dirs(&self) -> &[PathBuf] {
        &self.java.resources
    }

    /// Returns extra `javac` arguments.
    pub fn javac_args(&self) -> &[String] {
        &self.java.javac_args
    }

    /// Returns the configured JDK home, if any.
    pub fn java_home(&self) -> Option<&Path> {
        self.java.java_home.as_deref()
    }

    /// Returns the absolute output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the absolute archive path.
    pub fn jar_path(&self) -> PathBuf {
        self.output_dir.join(&self.jar_name)
    }

    /// Returns the absolute native executable path.
    pub fn exe_path(&self) -> PathBuf {
        self.output_dir.join(&self.exe_name)
    }

    /// Returns the absolute path of the launcher runtime log.
    pub fn launcher_log_path(&self) -> PathBuf {
        self.output_dir.join(LAUNCHER_LOG_FILE_NAME)
    }

    /// Returns the absolute path of the transient JAR manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.project_dir.join(MANIFEST_FILE_NAME)
    }

    /// Returns the absolute path of the transient Launch4j configuration.
    pub fn launcher_config_path(&self) -> PathBuf {
        self.project_dir.join(LAUNCHER_CONFIG_FILE_NAME)
    }

    /// Returns the launcher settings.
    pub fn launcher(&self) -> &LauncherSettings {
        &self.launcher
    }

    /// Returns the error dialog title.
    pub fn err_title(&self) -> String {
        self.launcher
            .err_title
            .clone()
            .unwrap_or_else(|| format!("{} Error", self.package.product_name))
    }

    /// Returns the deliverables to produce.
    pub fn package_types(&self) -> &[PackageType] {
        &self.package_types
    }

    /// Whether the run ends with a native executable.
    pub fn wraps_executable(&self) -> bool {
        self.package_types.contains(&PackageType::Exe)
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        package: PackageSettings,
        java: JavaSettings,
        launcher: LauncherSettings,
        project_dir: PathBuf,
        output_dir: PathBuf,
        jar_name: String,
        exe_name: String,
        package_types: Vec<PackageType>,
    ) -> Self {
        Self {
            package,
            java,
            launcher,
            project_dir,
            output_dir,
            jar_name,
            exe_name,
            package_types,
        }
    }
}
