//! Source compilation with `javac`.
//!
//! Only the entry-point file is named on the command line; `javac` follows
//! `-sourcepath` to compile everything it references.

use crate::bundler::{
    Stage,
    error::{Error, Result},
    settings::Settings,
    utils::{fs, process},
};
use std::{ffi::OsString, path::{Path, PathBuf}};

/// Compile the project into its classes directory.
///
/// Creates the classes directory when absent (erasing it first when the
/// project asks for a clean build), runs `javac`, and checks that at least one
/// class file came out.
///
/// # Returns
///
/// Absolute path of the classes directory.
pub async fn compile_sources(settings: &Settings, javac: &Path) -> Result<PathBuf> {
    let entry = settings.entry_source_file();
    if !entry.is_file() {
        return Err(Error::MissingEntryPoint { path: entry });
    }

    let classes_dir = settings.classes_dir().to_path_buf();
    fs::create_dir_all(&classes_dir, settings.clean_classes()).await?;

    log::info!(
        "Compiling {} from {}",
        settings.main_class(),
        settings.source_root().display()
    );
    process::run_tool(
        Stage::Compile,
        javac,
        &javac_args(settings),
        settings.project_dir(),
    )
    .await?;

    if !fs::contains_file_with_extension(&classes_dir, "class") {
        crate::bail!(
            "javac succeeded but produced no class files in {}",
            classes_dir.display()
        );
    }

    log::info!("Compilation complete: {}", classes_dir.display());
    Ok(classes_dir)
}

/// Builds the `javac` argument list.
pub fn javac_args(settings: &Settings) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-d".into(),
        settings.classes_dir().into(),
        "-sourcepath".into(),
        settings.source_root().into(),
    ];
    args.extend(settings.javac_args().iter().map(OsString::from));
    args.push(settings.entry_source_file().into());
    args
}
