//! JAR manifest generation.

use crate::bundler::{error::Result, settings::Settings, utils::fs::EphemeralFile};

/// Manifest text declaring the entry point.
pub fn manifest_contents(main_class: &str) -> String {
    format!("Main-Class: {main_class}\n")
}

/// Write the manifest to its transient location.
///
/// Any manifest left at that path is overwritten. The returned guard deletes
/// the file when dropped.
pub async fn write_manifest(settings: &Settings) -> Result<EphemeralFile> {
    EphemeralFile::write(
        settings.manifest_path(),
        manifest_contents(settings.main_class()),
        "JAR manifest",
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{JavaSettings, SettingsBuilder};

    #[test]
    fn declares_only_the_main_class() {
        assert_eq!(manifest_contents("Main"), "Main-Class: Main\n");
        assert_eq!(
            manifest_contents("com.example.App"),
            "Main-Class: com.example.App\n"
        );
    }

    #[tokio::test]
    async fn manifest_lives_only_as_long_as_its_guard() {
        let dir = tempfile::tempdir().unwrap();
        let settings = SettingsBuilder::new()
            .project_dir(dir.path())
            .java_settings(JavaSettings {
                main_class: "com.example.App".into(),
                ..Default::default()
            })
            .build()
            .unwrap();

        let manifest = write_manifest(&settings).await.unwrap();
        assert_eq!(manifest.path(), settings.manifest_path());
        assert_eq!(
            std::fs::read_to_string(manifest.path()).unwrap(),
            "Main-Class: com.example.App\n"
        );

        drop(manifest);
        assert!(!settings.manifest_path().exists());
    }
}
