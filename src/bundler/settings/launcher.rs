//! Native launcher (Launch4j) settings.

use crate::bundler::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Launch4j wrapper configuration.
///
/// Maps from the `[launcher]` table of `bundle.toml`. Defaults reproduce a
/// GUI launcher that prefers an installed Java 8+ runtime of either bitness
/// and points users at a JRE download page when none is found.
///
/// ```toml
/// [launcher]
/// header_type = "gui"
/// min_version = "1.8.0"
/// jdk_preference = "preferJre"
/// download_url = "https://adoptopenjdk.net/"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherSettings {
    /// Windows subsystem of the generated executable.
    pub header_type: HeaderType,

    /// Title of runtime error dialogs.
    ///
    /// Default: None (`"<product_name> Error"`)
    pub err_title: Option<String>,

    /// Constant command line arguments passed to the application.
    pub cmd_line: String,

    /// Working directory the launcher switches to before starting Java.
    ///
    /// Default: "."
    pub chdir: String,

    /// Process priority of the launched JVM.
    pub priority: Priority,

    /// Page opened when no suitable runtime is installed.
    ///
    /// Default: "https://adoptopenjdk.net/"
    pub download_url: String,

    /// Support page shown in error dialogs. Empty disables it.
    pub support_url: String,

    /// Keep the launcher process alive while the JVM runs.
    pub stay_alive: bool,

    /// Executable icon (.ico), relative to the project.
    pub icon: Option<PathBuf>,

    /// Minimum runtime version, e.g. "1.8.0" or "11".
    ///
    /// Default: "1.8.0"
    pub min_version: String,

    /// Maximum runtime version. Empty means unbounded.
    pub max_version: String,

    /// Installed JRE vs JDK policy.
    pub jdk_preference: JdkPreference,

    /// Accepted runtime bitness, in search order.
    pub runtime_bits: RuntimeBits,

    /// Whether a bundled runtime (see `jre_path`) is 64-bit.
    pub bundled_jre_64bit: bool,

    /// Bundled runtime location. Empty means auto-detect an installed one.
    pub jre_path: String,

    /// Launch4j installation probed when `launch4j` is not on PATH.
    ///
    /// Default: the platform's conventional install location
    pub install_dir: Option<PathBuf>,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            header_type: HeaderType::Gui,
            err_title: None,
            cmd_line: String::new(),
            chdir: ".".into(),
            priority: Priority::Normal,
            download_url: "https://adoptopenjdk.net/".into(),
            support_url: String::new(),
            stay_alive: false,
            icon: None,
            min_version: "1.8.0".into(),
            max_version: String::new(),
            jdk_preference: JdkPreference::PreferJre,
            runtime_bits: RuntimeBits::Bits64Then32,
            bundled_jre_64bit: false,
            jre_path: String::new(),
            install_dir: Some(default_install_dir()),
        }
    }
}

/// Conventional Launch4j installation directory for the host platform.
pub fn default_install_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        PathBuf::from(r"C:\Program Files (x86)\Launch4j")
    } else if cfg!(target_os = "macos") {
        PathBuf::from("/Applications/launch4j")
    } else {
        PathBuf::from("/opt/launch4j")
    }
}

/// Launcher executable subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderType {
    /// Windowed application, no console.
    Gui,
    /// Console application.
    Console,
}

impl HeaderType {
    /// Launch4j spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            HeaderType::Gui => "gui",
            HeaderType::Console => "console",
        }
    }
}

/// JVM process priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Normal,
    Idle,
    High,
}

impl Priority {
    /// Launch4j spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Normal => "normal",
            Priority::Idle => "idle",
            Priority::High => "high",
        }
    }
}

/// Runtime-preference policy between installed JREs and JDKs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JdkPreference {
    JreOnly,
    PreferJre,
    PreferJdk,
    JdkOnly,
}

impl JdkPreference {
    /// Launch4j spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            JdkPreference::JreOnly => "jreOnly",
            JdkPreference::PreferJre => "preferJre",
            JdkPreference::PreferJdk => "preferJdk",
            JdkPreference::JdkOnly => "jdkOnly",
        }
    }
}

/// Runtime bitness accepted by the launcher, in search order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RuntimeBits {
    #[serde(rename = "64")]
    Bits64,
    #[serde(rename = "64/32")]
    Bits64Then32,
    #[serde(rename = "32/64")]
    Bits32Then64,
    #[serde(rename = "32")]
    Bits32,
}

impl RuntimeBits {
    /// Launch4j spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            RuntimeBits::Bits64 => "64",
            RuntimeBits::Bits64Then32 => "64/32",
            RuntimeBits::Bits32Then64 => "32/64",
            RuntimeBits::Bits32 => "32",
        }
    }
}

/// Normalize a runtime version bound to three numeric components.
///
/// - "11" -> "11.0.0"
/// - "1.8" -> "1.8.0"
/// - "1.8.0_45" -> "1.8.0_45" (update suffix preserved)
/// - "" -> "" (unbounded)
///
/// Returns the normalized string together with its comparable form.
pub(crate) fn normalize_version(version: &str) -> Result<Option<(String, semver::Version)>> {
    let version = version.trim();
    if version.is_empty() {
        return Ok(None);
    }

    let (numeric, update) = match version.split_once('_') {
        Some((numeric, update)) => (numeric, Some(update)),
        None => (version, None),
    };

    let parts: Vec<&str> = numeric.split('.').collect();
    if parts.len() > 3 || parts.iter().any(|p| p.parse::<u64>().is_err()) {
        return Err(Error::InvalidConfig(format!(
            "runtime version `{version}` must look like 1.8.0, 1.8 or 11"
        )));
    }

    let mut padded = parts.clone();
    padded.resize(3, "0");
    let numeric = padded.join(".");

    let comparable = semver::Version::parse(&numeric).map_err(|e| {
        Error::InvalidConfig(format!("runtime version `{version}` is not valid: {e}"))
    })?;

    let normalized = match update {
        Some(update) if !update.is_empty() && update.chars().all(|c| c.is_ascii_digit()) => {
            format!("{numeric}_{update}")
        }
        Some(_) => {
            return Err(Error::InvalidConfig(format!(
                "runtime version `{version}` has a malformed update suffix"
            )));
        }
        None => numeric,
    };

    Ok(Some((normalized, comparable)))
}
