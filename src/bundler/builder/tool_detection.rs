//! External tool resolution.
//!
//! Tools are looked up against an explicit search path captured once at
//! startup. Resolution never edits the process environment: a tool found in a
//! fallback directory is returned as an absolute path and invoked directly.

use crate::bundler::error::{Error, Result};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Name of the Launch4j command line entry point on this platform.
pub const LAUNCH4J_TOOL: &str = if cfg!(target_os = "windows") {
    "launch4jc"
} else {
    "launch4j"
};

/// Locates external tools on a search path with optional extra directories.
#[derive(Debug, Clone)]
pub struct ToolResolver {
    search_path: Option<OsString>,
    java_home: Option<PathBuf>,
    cwd: PathBuf,
}

impl ToolResolver {
    /// Resolver using the process `PATH` and `JAVA_HOME`.
    pub fn from_env() -> Self {
        Self {
            search_path: std::env::var_os("PATH"),
            java_home: std::env::var_os("JAVA_HOME")
                .filter(|home| !home.is_empty())
                .map(PathBuf::from),
            cwd: current_dir(),
        }
    }

    /// Resolver using an explicit search path (same syntax as `PATH`) and no
    /// JDK home.
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
            java_home: None,
            cwd: current_dir(),
        }
    }

    /// Finds `tool` on the search path, then in `fallback_dir`.
    ///
    /// # Errors
    ///
    /// [`Error::ToolNotFound`] naming the tool and every extra directory
    /// probed. Never retried.
    pub fn resolve(&self, tool: &str, fallback_dir: Option<&Path>) -> Result<PathBuf> {
        self.find(tool, None, fallback_dir)
    }

    /// Finds a JDK tool (`javac`, `jar`), preferring `<java_home>/bin`.
    ///
    /// `configured_home` wins over the resolver's own `JAVA_HOME`.
    pub fn resolve_java_tool(&self, tool: &str, configured_home: Option<&Path>) -> Result<PathBuf> {
        let bin = configured_home
            .or(self.java_home.as_deref())
            .map(|home| home.join("bin"));
        self.find(tool, bin.as_deref(), None)
    }

    fn find(&self, tool: &str, preferred: Option<&Path>, fallback: Option<&Path>) -> Result<PathBuf> {
        let mut searched = Vec::new();

        if let Some(dir) = preferred {
            searched.push(dir.to_path_buf());
            if let Some(path) = self.find_in(tool, dir) {
                return Ok(path);
            }
        }

        match which::which_in(tool, self.search_path.as_ref(), &self.cwd) {
            Ok(path) => {
                log::debug!("Found {} on PATH at {}", tool, path.display());
                return Ok(path);
            }
            Err(e) => log::debug!("{} not found on PATH: {}", tool, e),
        }

        if let Some(dir) = fallback {
            searched.push(dir.to_path_buf());
            if let Some(path) = self.find_in(tool, dir) {
                log::info!(
                    "{} is not on PATH; using fallback installation at {}",
                    tool,
                    path.display()
                );
                return Ok(path);
            }
        }

        Err(Error::ToolNotFound {
            tool: tool.to_string(),
            searched,
        })
    }

    fn find_in(&self, tool: &str, dir: &Path) -> Option<PathBuf> {
        match which::which_in(tool, Some(dir), &self.cwd) {
            Ok(path) => {
                log::debug!("Found {} at {}", tool, path.display());
                Some(path)
            }
            Err(e) => {
                log::debug!("{} not found in {}: {}", tool, dir.display(), e);
                None
            }
        }
    }
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    fn install(dir: &Path, name: &str) -> PathBuf {
        std::fs::create_dir_all(dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn finds_tool_on_search_path() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("bin");
        let expected = install(&bin, "launch4j");

        let resolver = ToolResolver::with_search_path(bin.as_os_str());
        assert_eq!(resolver.resolve("launch4j", None).unwrap(), expected);
    }

    #[test]
    fn falls_back_to_install_dir() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty");
        std::fs::create_dir_all(&empty).unwrap();
        let install_dir = dir.path().join("Launch4j");
        let expected = install(&install_dir, "launch4j");

        let resolver = ToolResolver::with_search_path(empty.as_os_str());
        let found = resolver.resolve("launch4j", Some(&install_dir)).unwrap();
        assert_eq!(found, expected);
    }

    #[test]
    fn missing_tool_names_tool_and_probed_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let install_dir = dir.path().join("Launch4j");

        let resolver = ToolResolver::with_search_path(dir.path().as_os_str());
        let err = resolver.resolve("launch4j", Some(&install_dir)).unwrap_err();
        match err {
            Error::ToolNotFound { tool, searched } => {
                assert_eq!(tool, "launch4j");
                assert_eq!(searched, vec![install_dir]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn java_home_bin_wins_over_path() {
        let dir = tempfile::tempdir().unwrap();
        let on_path = install(&dir.path().join("path"), "javac");
        let home = dir.path().join("jdk");
        let in_home = install(&home.join("bin"), "javac");

        let resolver = ToolResolver::with_search_path(dir.path().join("path").as_os_str());
        assert_eq!(resolver.resolve_java_tool("javac", None).unwrap(), on_path);
        assert_eq!(resolver.resolve_java_tool("javac", Some(&home)).unwrap(), in_home);

        let resolver = ToolResolver {
            java_home: Some(home.clone()),
            ..resolver
        };
        assert_eq!(resolver.resolve_java_tool("javac", None).unwrap(), in_home);
    }
}
