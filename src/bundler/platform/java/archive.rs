//! Archive creation with `jar`.

use crate::bundler::{
    Stage,
    error::Result,
    settings::Settings,
    utils::{fs, fs::EphemeralFile, process},
};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Pack compiled classes, the manifest and resource directories into the
/// distributable archive.
///
/// # Process
///
/// 1. Create the output directory
/// 2. Create any missing resource directory empty, so an optional resource
///    directory never fails packaging
/// 3. Remove the previous archive
/// 4. Run `jar cmf <manifest> <archive> -C <classes> . [-C <src> <resource>]...`
///
/// # Returns
///
/// Absolute path of the archive.
pub async fn create_jar(
    settings: &Settings,
    jar_tool: &Path,
    manifest: &EphemeralFile,
) -> Result<PathBuf> {
    let jar_path = settings.jar_path();

    fs::create_dir_all(settings.output_dir(), false).await?;

    for resource in settings.resource_dirs() {
        let dir = settings.source_root().join(resource);
        if !dir.is_dir() {
            log::info!("Creating empty resource directory {}", dir.display());
            fs::create_dir_all(&dir, false).await?;
        }
    }

    fs::remove_file_if_exists(&jar_path).await?;

    log::info!("Creating JAR file {}", jar_path.display());
    process::run_tool(
        Stage::Archive,
        jar_tool,
        &jar_args(settings, manifest.path(), &jar_path),
        settings.project_dir(),
    )
    .await?;

    if !jar_path.is_file() {
        crate::bail!(
            "jar succeeded but did not create {}",
            jar_path.display()
        );
    }

    log::info!("JAR file created at {}", jar_path.display());
    Ok(jar_path)
}

/// Builds the `jar` argument list.
pub fn jar_args(settings: &Settings, manifest: &Path, jar_path: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "cmf".into(),
        manifest.into(),
        jar_path.into(),
        "-C".into(),
        settings.classes_dir().into(),
        ".".into(),
    ];
    for resource in settings.resource_dirs() {
        args.push("-C".into());
        args.push(settings.source_root().into());
        args.push(resource.into());
    }
    args
}
