//! The bundle command: load settings, run the pipeline, report artifacts.

use crate::bundler::{Bundler, PackageType, Settings, SettingsBuilder, BundledArtifact};
use crate::cli::{Args, RuntimeConfig};
use crate::error::Result;
use crate::metadata::{self, ProjectManifest};

/// Run the full bundling pipeline for the project named by `args`.
///
/// # Returns
///
/// Exit code 0 once every requested artifact exists. Pipeline failures are
/// returned as errors.
pub async fn execute(args: &Args, runtime_config: &RuntimeConfig) -> Result<i32> {
    let project = metadata::load_project(&args.project_dir, args.config.as_deref()).await?;
    let settings = build_settings(args, project)?;

    runtime_config.section(&format!(
        "Bundling {} {}",
        settings.product_name(),
        settings.version_string()
    ))?;
    if !settings.description().is_empty() {
        runtime_config.verbose_println(settings.description())?;
    }
    runtime_config.verbose_println(&format!("Project: {}", settings.project_dir().display()))?;
    runtime_config.verbose_println(&format!("Main class: {}", settings.main_class()))?;
    runtime_config.progress(&format!(
        "Producing {}",
        settings
            .package_types()
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" + ")
    ))?;

    let artifacts = Bundler::new(settings).bundle().await?;

    report(&artifacts, args.json, runtime_config)?;
    Ok(0)
}

/// Merge the project file with command line overrides and resolve settings.
pub fn build_settings(args: &Args, project: ProjectManifest) -> Result<Settings> {
    let ProjectManifest {
        mut package,
        mut java,
        mut output,
        mut launcher,
    } = project;

    if let Some(name) = &args.product_name {
        package.product_name = name.clone();
    }
    if let Some(main_class) = &args.main_class {
        java.main_class = main_class.clone();
    }
    if let Some(dir) = &args.output_dir {
        output.directory = dir.clone();
    }
    if let Some(dir) = &args.launch4j_dir {
        launcher.install_dir = Some(dir.clone());
    }
    if args.clean {
        java.clean = true;
    }

    let package_types = if args.jar_only {
        vec![PackageType::Jar]
    } else {
        vec![PackageType::Jar, PackageType::Exe]
    };

    Ok(SettingsBuilder::new()
        .project_dir(&args.project_dir)
        .package_settings(package)
        .java_settings(java)
        .output_settings(output)
        .launcher_settings(launcher)
        .package_types(package_types)
        .build()?)
}

fn report(artifacts: &[BundledArtifact], json: bool, runtime_config: &RuntimeConfig) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(artifacts)?);
        return Ok(());
    }

    for artifact in artifacts {
        for path in &artifact.paths {
            runtime_config.success(&format!(
                "{} created at {} ({} bytes)",
                artifact.package_type.to_string().to_uppercase(),
                path.display(),
                artifact.size
            ))?;
        }
        runtime_config.indent(&format!("SHA256: {}", artifact.checksum))?;
    }
    runtime_config.success("Build process completed successfully.")?;
    Ok(())
}
