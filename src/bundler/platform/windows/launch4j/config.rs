//! Launch4j configuration generation.
//!
//! Renders [`LAUNCH4J_TEMPLATE`] with handlebars. Every path in the output is
//! absolute: Launch4j resolves relative paths against the configuration
//! file's directory, not the directory the bundler was started from.

use super::template::LAUNCH4J_TEMPLATE;
use crate::bundler::{
    error::{Error, Result},
    settings::Settings,
    utils::fs::EphemeralFile,
};
use handlebars::Handlebars;
use serde::Serialize;

/// Values interpolated into the Launch4j template.
#[derive(Debug, Serialize)]
struct ConfigData<'a> {
    dont_wrap_jar: bool,
    header_type: &'static str,
    jar: String,
    outfile: String,
    err_title: String,
    cmd_line: &'a str,
    chdir: &'a str,
    priority: &'static str,
    download_url: &'a str,
    support_url: &'a str,
    stay_alive: bool,
    icon: String,
    log: String,
    jre_path: &'a str,
    bundled_jre_64bit: bool,
    min_version: &'a str,
    max_version: &'a str,
    jdk_preference: &'static str,
    runtime_bits: &'static str,
}

impl<'a> ConfigData<'a> {
    fn from_settings(settings: &'a Settings) -> Self {
        let launcher = settings.launcher();
        Self {
            // The archive is always embedded into the executable.
            dont_wrap_jar: false,
            header_type: launcher.header_type.as_str(),
            jar: settings.jar_path().display().to_string(),
            outfile: settings.exe_path().display().to_string(),
            err_title: settings.err_title(),
            cmd_line: &launcher.cmd_line,
            chdir: &launcher.chdir,
            priority: launcher.priority.as_str(),
            download_url: &launcher.download_url,
            support_url: &launcher.support_url,
            stay_alive: launcher.stay_alive,
            icon: launcher
                .icon
                .as_ref()
                .map(|icon| icon.display().to_string())
                .unwrap_or_default(),
            log: settings.launcher_log_path().display().to_string(),
            jre_path: &launcher.jre_path,
            bundled_jre_64bit: launcher.bundled_jre_64bit,
            min_version: &launcher.min_version,
            max_version: &launcher.max_version,
            jdk_preference: launcher.jdk_preference.as_str(),
            runtime_bits: launcher.runtime_bits.as_str(),
        }
    }
}

/// Render the Launch4j configuration for `settings`.
pub fn render_config(settings: &Settings) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::html_escape);
    handlebars.set_strict_mode(true);

    handlebars
        .register_template_string("launch4j.xml", LAUNCH4J_TEMPLATE)
        .map_err(|e| Error::Template(format!("failed to register Launch4j template: {}", e)))?;

    handlebars
        .render("launch4j.xml", &ConfigData::from_settings(settings))
        .map_err(|e| Error::Template(format!("failed to render Launch4j template: {}", e)))
}

/// Render and write the configuration to its transient location.
///
/// The returned guard deletes the file when dropped.
pub async fn write_config(settings: &Settings) -> Result<EphemeralFile> {
    let contents = render_config(settings)?;
    EphemeralFile::write(
        settings.launcher_config_path(),
        contents,
        "Launch4j configuration",
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{
        HeaderType, JdkPreference, LauncherSettings, OutputSettings, PackageSettings,
        SettingsBuilder,
    };

    fn element<'x>(xml: &'x str, name: &str) -> &'x str {
        let open = format!("<{name}>");
        let close = format!("</{name}>");
        let start = xml.find(&open).unwrap_or_else(|| panic!("<{name}> missing")) + open.len();
        let end = xml[start..].find(&close).unwrap() + start;
        &xml[start..end]
    }

    fn settings() -> Settings {
        SettingsBuilder::new()
            .project_dir("/work/notes")
            .package_settings(PackageSettings {
                product_name: "StickyNoteApp".into(),
                ..Default::default()
            })
            .build()
            .unwrap()
    }

    #[test]
    fn default_config_matches_launcher_policy() {
        let xml = render_config(&settings()).unwrap();

        assert_eq!(element(&xml, "dontWrapJar"), "false");
        assert_eq!(element(&xml, "headerType"), "gui");
        assert_eq!(element(&xml, "jar"), "/work/notes/dist/StickyNoteApp.jar");
        assert_eq!(element(&xml, "outfile"), "/work/notes/dist/StickyNoteApp.exe");
        assert_eq!(element(&xml, "log"), "/work/notes/dist/launch4j.log");
        assert_eq!(element(&xml, "errTitle"), "StickyNoteApp Error");
        assert_eq!(element(&xml, "cmdLine"), "");
        assert_eq!(element(&xml, "chdir"), ".");
        assert_eq!(element(&xml, "priority"), "normal");
        assert_eq!(element(&xml, "downloadUrl"), "https://adoptopenjdk.net/");
        assert_eq!(element(&xml, "stayAlive"), "false");
        assert_eq!(element(&xml, "path"), "");
        assert_eq!(element(&xml, "bundledJre64Bit"), "false");
        assert_eq!(element(&xml, "minVersion"), "1.8.0");
        assert_eq!(element(&xml, "maxVersion"), "");
        assert_eq!(element(&xml, "jdkPreference"), "preferJre");
        assert_eq!(element(&xml, "runtimeBits"), "64/32");
    }

    #[test]
    fn paths_are_absolute_even_for_relative_configuration() {
        let settings = SettingsBuilder::new()
            .project_dir("relative/project")
            .output_settings(OutputSettings {
                directory: "./out/../dist".into(),
                ..Default::default()
            })
            .launcher_settings(LauncherSettings {
                icon: Some("assets/app.ico".into()),
                ..Default::default()
            })
            .build()
            .unwrap();
        let xml = render_config(&settings).unwrap();

        for name in ["jar", "outfile", "log", "icon"] {
            let value = element(&xml, name);
            assert!(std::path::Path::new(value).is_absolute(), "{name}: {value}");
            assert!(!value.contains(".."), "{name}: {value}");
        }
    }

    #[test]
    fn values_are_xml_escaped() {
        let settings = SettingsBuilder::new()
            .project_dir("/work/notes")
            .package_settings(PackageSettings {
                product_name: "Notes".into(),
                ..Default::default()
            })
            .launcher_settings(LauncherSettings {
                err_title: Some("Notes & <Friends>".into()),
                cmd_line: "--greeting=\"hi\" --name 'Ann'".into(),
                header_type: HeaderType::Console,
                jdk_preference: JdkPreference::PreferJdk,
                ..Default::default()
            })
            .build()
            .unwrap();
        let xml = render_config(&settings).unwrap();

        assert_eq!(element(&xml, "errTitle"), "Notes &amp; &lt;Friends&gt;");
        assert_eq!(
            element(&xml, "cmdLine"),
            "--greeting&#x3D;&quot;hi&quot; --name &#x27;Ann&#x27;"
        );
        assert_eq!(element(&xml, "headerType"), "console");
        assert_eq!(element(&xml, "jdkPreference"), "preferJdk");
    }

    #[tokio::test]
    async fn written_config_is_removed_with_its_guard() {
        let dir = tempfile::tempdir().unwrap();
        let settings = SettingsBuilder::new().project_dir(dir.path()).build().unwrap();

        let config = write_config(&settings).await.unwrap();
        let xml = std::fs::read_to_string(config.path()).unwrap();
        assert_eq!(element(&xml, "jar"), settings.jar_path().display().to_string());

        drop(config);
        assert!(!settings.launcher_config_path().exists());
    }
}
