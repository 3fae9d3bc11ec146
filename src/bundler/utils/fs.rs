//! File system utilities for bundling.
//!
//! Idempotent directory creation and removal, plus [`EphemeralFile`], a
//! scoped guard for descriptor files that must never outlive a run.

use crate::bundler::error::{ErrorExt, Result};
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Creates all of the directories of the specified path, erasing it first if specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        // Try removal, ignore NotFound (idempotent)
        match fs::remove_dir_all(path).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e).fs_context("erasing directory", path),
        }
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes a file if it exists.
pub async fn remove_file_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e).fs_context("removing stale file", path),
    }
}

/// A transient file that is deleted when the guard goes out of scope.
///
/// Acquired when a stage writes its descriptor and released on every exit
/// path, including early returns through `?` and panics unwinding past it.
#[derive(Debug)]
pub struct EphemeralFile {
    path: PathBuf,
}

impl EphemeralFile {
    /// Writes `contents` to `path`, replacing any existing file.
    ///
    /// The guard is armed before writing, so a partially written file is
    /// removed as well.
    pub async fn write(path: PathBuf, contents: impl AsRef<[u8]>, what: &str) -> Result<Self> {
        let guard = Self { path };
        fs::write(&guard.path, contents)
            .await
            .fs_context(&format!("writing {what}"), &guard.path)?;
        log::debug!("Wrote {} to {}", what, guard.path.display());
        Ok(guard)
    }

    /// Returns the guarded path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for EphemeralFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => log::debug!("Removed {}", self.path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Failed to remove {}: {}", self.path.display(), e),
        }
    }
}

/// Returns whether `dir` contains at least one file with the given extension.
pub fn contains_file_with_extension(dir: &Path, extension: &str) -> bool {
    walkdir::WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .any(|e| e.path().extension().and_then(|x| x.to_str()) == Some(extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ephemeral_file_is_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.txt");

        let guard = EphemeralFile::write(path.clone(), "Main-Class: Main\n", "manifest")
            .await
            .unwrap();
        assert_eq!(std::fs::read_to_string(guard.path()).unwrap(), "Main-Class: Main\n");

        drop(guard);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn ephemeral_file_overwrites_stale_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launch4j_config.xml");
        std::fs::write(&path, "stale").unwrap();

        let guard = EphemeralFile::write(path.clone(), "fresh", "config").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh");
        drop(guard);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn ephemeral_file_tolerates_external_removal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.txt");
        let guard = EphemeralFile::write(path.clone(), "x", "test file").await.unwrap();
        std::fs::remove_file(&path).unwrap();
        drop(guard);
    }

    #[tokio::test]
    async fn create_dir_all_is_idempotent_and_can_erase() {
        let dir = tempfile::tempdir().unwrap();
        let classes = dir.path().join("bin");

        create_dir_all(&classes, false).await.unwrap();
        std::fs::write(classes.join("Old.class"), "old").unwrap();
        create_dir_all(&classes, false).await.unwrap();
        assert!(classes.join("Old.class").exists());

        create_dir_all(&classes, true).await.unwrap();
        assert!(classes.is_dir());
        assert!(!classes.join("Old.class").exists());
    }

    #[test]
    fn finds_class_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!contains_file_with_extension(dir.path(), "class"));
        std::fs::create_dir_all(dir.path().join("com/example")).unwrap();
        std::fs::write(dir.path().join("com/example/App.class"), "").unwrap();
        assert!(contains_file_with_extension(dir.path(), "class"));
    }
}
