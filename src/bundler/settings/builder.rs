//! Builder for constructing Settings.

use super::{
    JavaSettings, LauncherSettings, OutputSettings, PackageSettings, Settings, normalize_version,
};
use crate::bundler::{
    error::{Context, Error, ErrorExt, Result},
    platform::PackageType,
};
use path_absolutize::Absolutize;
use std::path::{Component, Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Validates the configuration and resolves every relative path against the
/// project directory, which is itself made absolute against the current
/// working directory.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_jar::bundler::{JavaSettings, PackageSettings, SettingsBuilder};
///
/// # fn example() -> kodegen_bundler_jar::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_dir(".")
///     .package_settings(PackageSettings {
///         product_name: "StickyNoteApp".into(),
///         ..Default::default()
///     })
///     .java_settings(JavaSettings {
///         main_class: "com.example.notes.Main".into(),
///         ..Default::default()
///     })
///     .build()?;
/// assert!(settings.jar_path().is_absolute());
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    project_dir: Option<PathBuf>,
    package: PackageSettings,
    java: JavaSettings,
    output: OutputSettings,
    launcher: LauncherSettings,
    package_types: Option<Vec<PackageType>>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project root. Required.
    pub fn project_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets package metadata.
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package = settings;
        self
    }

    /// Sets the Java build configuration.
    pub fn java_settings(mut self, settings: JavaSettings) -> Self {
        self.java = settings;
        self
    }

    /// Sets the output locations.
    pub fn output_settings(mut self, settings: OutputSettings) -> Self {
        self.output = settings;
        self
    }

    /// Sets the launcher configuration.
    pub fn launcher_settings(mut self, settings: LauncherSettings) -> Self {
        self.launcher = settings;
        self
    }

    /// Sets the deliverables to produce.
    ///
    /// Default: JAR and native executable
    pub fn package_types(mut self, types: Vec<PackageType>) -> Self {
        self.package_types = Some(types);
        self
    }

    /// Validates the configuration and resolves all paths.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a missing project directory, an
    /// invalid entry-point class, escaping resource paths, malformed version
    /// bounds or URLs, and an empty deliverable list.
    pub fn build(self) -> Result<Settings> {
        let project_dir = self.project_dir.context("project_dir is required")?;
        let project_dir = project_dir
            .absolutize()
            .fs_context("resolving project directory", &project_dir)?
            .into_owned();

        let mut package = self.package;
        if package.product_name.trim().is_empty() {
            package.product_name = project_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .filter(|n| !n.is_empty())
                .ok_or_else(|| {
                    Error::InvalidConfig(
                        "product_name is empty and cannot be derived from the project directory"
                            .into(),
                    )
                })?;
        }

        let mut java = self.java;
        validate_main_class(&java.main_class)?;
        java.source_dir = resolve(&project_dir, &java.source_dir)?;
        java.classes_dir = resolve(&project_dir, &java.classes_dir)?;
        java.java_home = java
            .java_home
            .map(|home| resolve(&project_dir, &home))
            .transpose()?;
        for resource in &java.resources {
            validate_resource_dir(resource)?;
        }

        let output_dir = resolve(&project_dir, &self.output.directory)?;
        let jar_name = self
            .output
            .jar_name
            .unwrap_or_else(|| format!("{}.jar", package.product_name));
        let exe_name = self
            .output
            .exe_name
            .unwrap_or_else(|| format!("{}.exe", package.product_name));
        validate_file_name(&jar_name)?;
        validate_file_name(&exe_name)?;

        let mut launcher = self.launcher;
        launcher.icon = launcher
            .icon
            .map(|icon| resolve(&project_dir, &icon))
            .transpose()?;
        launcher.install_dir = launcher
            .install_dir
            .map(|dir| resolve(&project_dir, &dir))
            .transpose()?;
        normalize_version_bounds(&mut launcher)?;
        validate_url("download_url", &launcher.download_url)?;
        validate_url("support_url", &launcher.support_url)?;

        let mut package_types = self
            .package_types
            .unwrap_or_else(|| vec![PackageType::Jar, PackageType::Exe]);
        package_types.sort();
        package_types.dedup();
        if package_types.is_empty() {
            return Err(Error::InvalidConfig("no package types requested".into()));
        }
        // The executable wraps the archive, so the archive is always built.
        if !package_types.contains(&PackageType::Jar) {
            package_types.insert(0, PackageType::Jar);
        }

        Ok(Settings::new(
            package,
            java,
            launcher,
            project_dir,
            output_dir,
            jar_name,
            exe_name,
            package_types,
        ))
    }
}

fn resolve(base: &Path, path: &Path) -> Result<PathBuf> {
    let joined = base.join(path);
    Ok(joined
        .absolutize()
        .fs_context("resolving path", &joined)?
        .into_owned())
}

fn validate_main_class(main_class: &str) -> Result<()> {
    let valid_segment = |segment: &str| {
        let mut chars = segment.chars();
        matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_' || c == '$')
            && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
    };

    if main_class.is_empty() || !main_class.split('.').all(valid_segment) {
        return Err(Error::InvalidConfig(format!(
            "main_class `{main_class}` is not a valid Java class name"
        )));
    }
    Ok(())
}

fn validate_resource_dir(resource: &Path) -> Result<()> {
    let escapes = resource
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if resource.as_os_str().is_empty() || escapes {
        return Err(Error::InvalidConfig(format!(
            "resource directory `{}` must be a relative path inside the source root",
            resource.display()
        )));
    }
    Ok(())
}

fn validate_file_name(name: &str) -> Result<()> {
    let path = Path::new(name);
    if name.is_empty() || path.file_name().map(|n| n != path.as_os_str()).unwrap_or(true) {
        return Err(Error::InvalidConfig(format!(
            "output file name `{name}` must not contain directories"
        )));
    }
    Ok(())
}

fn normalize_version_bounds(launcher: &mut LauncherSettings) -> Result<()> {
    let min = normalize_version(&launcher.min_version)?;
    let max = normalize_version(&launcher.max_version)?;

    if let (Some((min_str, min_v)), Some((max_str, max_v))) = (&min, &max) {
        if max_v < min_v {
            return Err(Error::InvalidConfig(format!(
                "max_version {max_str} is lower than min_version {min_str}"
            )));
        }
    }

    launcher.min_version = min.map(|(s, _)| s).unwrap_or_default();
    launcher.max_version = max.map(|(s, _)| s).unwrap_or_default();
    Ok(())
}

fn validate_url(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|e| Error::InvalidConfig(format!("{field} `{value}` is not a valid URL: {e}")))
}
