//! Shared helpers for pipeline tests: a scratch project plus fake JDK and
//! Launch4j executables written as shell scripts.

#![allow(dead_code)]

use kodegen_bundler_jar::bundler::{
    LauncherSettings, PackageSettings, SettingsBuilder, ToolResolver,
};
use std::{
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

/// `javac -d CLASSES -sourcepath SRC [args] ENTRY`
pub const JAVAC_OK: &str = r#"#!/bin/sh
mkdir -p "$2"
echo compiled > "$2/Main.class"
"#;

pub const JAVAC_FAIL: &str = r#"#!/bin/sh
echo "Main.java:3: error: ';' expected" >&2
exit 1
"#;

/// `jar cmf MANIFEST JAR [-C DIR PATH]...`; the archive records the manifest
/// followed by the content arguments.
pub const JAR_OK: &str = r#"#!/bin/sh
cat "$2" > "$3"
shift 3
echo "$@" >> "$3"
"#;

pub const JAR_FAIL: &str = r#"#!/bin/sh
echo "jar: cannot write archive" >&2
exit 2
"#;

/// Copies the configuration next to itself and writes the `<outfile>`.
pub const LAUNCH4J_OK: &str = r#"#!/bin/sh
out=$(sed -n 's:.*<outfile>\(.*\)</outfile>.*:\1:p' "$1")
cp "$1" "$(dirname "$0")/captured.xml"
echo launcher > "$out"
"#;

pub const LAUNCH4J_FAIL: &str = r#"#!/bin/sh
echo "launch4j: Specified jar doesn't exist"
exit 1
"#;

/// Writes a log next to the `<outfile>` before failing.
pub const LAUNCH4J_FAIL_WITH_LOG: &str = r#"#!/bin/sh
out=$(sed -n 's:.*<outfile>\(.*\)</outfile>.*:\1:p' "$1")
echo "Invalid or missing minVersion" > "$(dirname "$out")/launch4j.log"
echo "launch4j: build failed"
exit 1
"#;

/// A scratch project with `src/Main.java` and an empty tool directory.
pub struct Workspace {
    root: TempDir,
    pub project: PathBuf,
    pub bin: PathBuf,
    pub launch4j_home: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let project = root.path().join("sticky-notes");
        let bin = root.path().join("bin");
        let launch4j_home = root.path().join("launch4j");

        std::fs::create_dir_all(project.join("src")).unwrap();
        std::fs::write(
            project.join("src/Main.java"),
            "public class Main {\n    public static void main(String[] args) {}\n}\n",
        )
        .unwrap();
        std::fs::create_dir_all(&bin).unwrap();

        Self {
            root,
            project,
            bin,
            launch4j_home,
        }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Installs an executable script named `name` into `dir`.
    pub fn install(&self, dir: &Path, name: &str, script: &str) -> PathBuf {
        std::fs::create_dir_all(dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Installs a working `javac` and `jar` on the search path.
    pub fn install_jdk(&self) {
        self.install(&self.bin, "javac", JAVAC_OK);
        self.install(&self.bin, "jar", JAR_OK);
    }

    pub fn install_launch4j(&self, dir: &Path, script: &str) {
        self.install(dir, "launch4j", script);
    }

    pub fn resolver(&self) -> ToolResolver {
        ToolResolver::with_search_path(self.bin.as_os_str())
    }

    /// Settings for product "App" whose Launch4j fallback is `launch4j_home`.
    pub fn settings(&self) -> SettingsBuilder {
        SettingsBuilder::new()
            .project_dir(&self.project)
            .package_settings(PackageSettings {
                product_name: "App".into(),
                ..Default::default()
            })
            .launcher_settings(LauncherSettings {
                install_dir: Some(self.launch4j_home.clone()),
                ..Default::default()
            })
    }

    pub fn jar(&self) -> PathBuf {
        self.project.join("dist/App.jar")
    }

    pub fn exe(&self) -> PathBuf {
        self.project.join("dist/App.exe")
    }

    /// Transient descriptors still present in the project root.
    pub fn leftover_descriptors(&self) -> Vec<PathBuf> {
        ["manifest.txt", "launch4j_config.xml"]
            .iter()
            .map(|name| self.project.join(name))
            .filter(|path| path.exists())
            .collect()
    }

    /// Configuration captured by [`LAUNCH4J_OK`] installed in `dir`.
    pub fn captured_config(&self, dir: &Path) -> String {
        std::fs::read_to_string(dir.join("captured.xml")).unwrap()
    }
}

/// Text between `<name>` and `</name>`.
pub fn element<'x>(xml: &'x str, name: &str) -> &'x str {
    let open = format!("<{name}>");
    let close = format!("</{name}>");
    let start = xml.find(&open).unwrap_or_else(|| panic!("<{name}> missing")) + open.len();
    let end = xml[start..].find(&close).unwrap() + start;
    &xml[start..end]
}
