//! Command line behaviour: exit status and user-facing output.

#![cfg(unix)]
#![allow(deprecated)] // Command::cargo_bin

mod common;

use assert_cmd::Command;
use common::{JAVAC_FAIL, LAUNCH4J_OK, Workspace, element};
use std::path::Path;
use predicates::prelude::*;

fn bundler(ws: &Workspace) -> Command {
    let mut cmd = Command::cargo_bin("kodegen_bundler_jar").unwrap();
    cmd.env("PATH", format!("{}:/usr/bin:/bin", ws.bin.display()))
        .env_remove("JAVA_HOME")
        .env_remove("LAUNCH4J_HOME")
        .env_remove("RUST_LOG")
        .arg("--project-dir")
        .arg(&ws.project)
        .arg("--product-name")
        .arg("App")
        .arg("--launch4j-dir")
        .arg(&ws.launch4j_home);
    cmd
}

#[test]
fn compile_failure_exits_nonzero() {
    let ws = Workspace::new();
    ws.install_jdk();
    ws.install(&ws.bin, "javac", JAVAC_FAIL);

    bundler(&ws)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("compile stage failed"))
        .stderr(predicate::str::contains("';' expected"));

    assert!(!ws.jar().exists());
    assert!(ws.leftover_descriptors().is_empty());
}

#[test]
fn missing_launch4j_exits_nonzero_and_names_the_tool() {
    let ws = Workspace::new();
    ws.install_jdk();

    bundler(&ws)
        .assert()
        .failure()
        .stderr(predicate::str::contains("`launch4j` was not found"));

    assert!(ws.jar().is_file());
    assert!(!ws.exe().exists());
}

#[test]
fn successful_run_prints_json_summary() {
    let ws = Workspace::new();
    ws.install_jdk();
    ws.install_launch4j(&ws.bin, LAUNCH4J_OK);

    let assert = bundler(&ws).arg("--json").assert().success();

    let summary: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let artifacts = summary.as_array().unwrap();
    assert_eq!(artifacts.len(), 2);
    assert_eq!(artifacts[0]["package_type"], "jar");
    assert_eq!(artifacts[1]["package_type"], "exe");
    assert!(ws.exe().is_file());
    assert!(ws.leftover_descriptors().is_empty());
}

#[test]
fn jar_only_succeeds_without_launch4j() {
    let ws = Workspace::new();
    ws.install_jdk();

    bundler(&ws).arg("--jar-only").assert().success();

    assert!(ws.jar().is_file());
    assert!(!ws.exe().exists());
}

#[test]
fn unknown_project_directory_is_rejected() {
    let ws = Workspace::new();

    Command::cargo_bin("kodegen_bundler_jar")
        .unwrap()
        .arg("--project-dir")
        .arg(ws.root().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing"));
}

#[test]
fn relative_project_dir_yields_absolute_launcher_paths() {
    let ws = Workspace::new();
    ws.install_jdk();
    ws.install_launch4j(&ws.bin, LAUNCH4J_OK);

    Command::cargo_bin("kodegen_bundler_jar")
        .unwrap()
        .current_dir(ws.root())
        .env("PATH", format!("{}:/usr/bin:/bin", ws.bin.display()))
        .env_remove("JAVA_HOME")
        .env_remove("LAUNCH4J_HOME")
        .args(["--project-dir", "sticky-notes", "--product-name", "App"])
        .arg("--launch4j-dir")
        .arg(&ws.launch4j_home)
        .assert()
        .success();

    let xml = ws.captured_config(&ws.bin);
    for name in ["jar", "outfile", "log"] {
        assert!(Path::new(element(&xml, name)).is_absolute(), "{name}: {xml}");
    }
    // getcwd() reports the resolved temp dir, so compare canonical paths.
    let canonical = |p: &Path| std::fs::canonicalize(p).unwrap();
    assert_eq!(canonical(Path::new(element(&xml, "jar"))), canonical(&ws.jar()));
    assert_eq!(canonical(Path::new(element(&xml, "outfile"))), canonical(&ws.exe()));
}

#[test]
fn verbose_run_shows_project_description() {
    let ws = Workspace::new();
    ws.install_jdk();
    std::fs::write(
        ws.project.join("bundle.toml"),
        "[package]\ndescription = \"Desktop sticky notes\"\n",
    )
    .unwrap();

    bundler(&ws)
        .args(["--jar-only", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Desktop sticky notes"))
        .stdout(predicate::str::contains("JAR created at"));
}
