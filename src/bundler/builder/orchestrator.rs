//! Main bundler orchestration and coordination.
//!
//! This module provides the [`Bundler`] orchestrator that runs the pipeline
//! stages strictly in order and collects artifact metadata.

use crate::bundler::{
    BundledArtifact, PackageType,
    error::{ErrorExt, Result},
    platform::{
        java::{archive, compile, manifest},
        windows::launch4j,
    },
    settings::Settings,
    utils::fs,
};
use std::path::PathBuf;

use super::{
    checksum::calculate_sha256,
    state::{BuildState, Stage},
    tool_detection::ToolResolver,
};

/// Main bundler orchestrator.
///
/// Runs `compile → manifest → archive → wrap`. Each stage blocks on its
/// external tool, and the first failure aborts every later stage. Transient
/// descriptors are owned by scope guards inside the stages, so they are gone
/// by the time [`Bundler::bundle`] returns, whatever the outcome.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_jar::bundler::{Bundler, Settings};
///
/// # async fn example(settings: Settings) -> kodegen_bundler_jar::bundler::Result<()> {
/// let artifacts = Bundler::new(settings).bundle().await?;
/// for artifact in artifacts {
///     println!("{} ({} bytes) sha256={}", artifact.package_type, artifact.size, artifact.checksum);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
    tools: ToolResolver,
}

impl Bundler {
    /// Creates a bundler resolving tools from the process `PATH` and `JAVA_HOME`.
    pub fn new(settings: Settings) -> Self {
        Self::with_tool_resolver(settings, ToolResolver::from_env())
    }

    /// Creates a bundler with an explicit tool resolver.
    pub fn with_tool_resolver(settings: Settings, tools: ToolResolver) -> Self {
        Self { settings, tools }
    }

    /// Runs the whole pipeline.
    ///
    /// # Returns
    ///
    /// One [`BundledArtifact`] per deliverable, archive first.
    ///
    /// # Errors
    ///
    /// The first stage error, unchanged. Deliverables from an earlier run may
    /// remain at their paths only if the failing stage ran before the stage
    /// that replaces them.
    pub async fn bundle(&self) -> Result<Vec<BundledArtifact>> {
        self.remove_stale_descriptors().await?;

        let mut state = BuildState::Init;

        match self.run_stages(&mut state).await {
            Ok(produced) => {
                transition(&mut state, BuildState::Done);
                self.collect_artifacts(produced).await
            }
            Err(e) => {
                if let Some(stage) = state.next_stage() {
                    log::error!("[{}] {}", stage, e);
                    transition(&mut state, BuildState::Failed(stage));
                }
                Err(e)
            }
        }
    }

    /// Removes descriptors left behind by an interrupted earlier run.
    async fn remove_stale_descriptors(&self) -> Result<()> {
        for path in [
            self.settings.manifest_path(),
            self.settings.launcher_config_path(),
        ] {
            if path.exists() {
                log::warn!("Removing stale {} from an earlier run", path.display());
                fs::remove_file_if_exists(&path).await?;
            }
        }
        Ok(())
    }

    async fn run_stages(&self, state: &mut BuildState) -> Result<Vec<(PackageType, PathBuf)>> {
        let settings = &self.settings;

        let javac = self.tools.resolve_java_tool("javac", settings.java_home())?;
        compile::compile_sources(settings, &javac).await?;
        transition(state, BuildState::after(Stage::Compile));

        let manifest = manifest::write_manifest(settings).await?;
        transition(state, BuildState::after(Stage::Manifest));

        let jar_tool = self.tools.resolve_java_tool("jar", settings.java_home())?;
        let jar = archive::create_jar(settings, &jar_tool, &manifest).await?;
        drop(manifest);
        transition(state, BuildState::after(Stage::Archive));

        let mut produced = vec![(PackageType::Jar, jar)];

        if settings.wraps_executable() {
            let exe = launch4j::bundle_project(settings, &self.tools).await?;
            transition(state, BuildState::after(Stage::Wrap));
            produced.push((PackageType::Exe, exe));
        } else {
            log::info!("Skipping native executable; archive only");
        }

        Ok(produced)
    }

    async fn collect_artifacts(
        &self,
        produced: Vec<(PackageType, PathBuf)>,
    ) -> Result<Vec<BundledArtifact>> {
        let mut artifacts = Vec::with_capacity(produced.len());

        for (package_type, path) in produced {
            let size = tokio::fs::metadata(&path)
                .await
                .fs_context("reading artifact metadata", &path)?
                .len();
            let checksum = calculate_sha256(&path).await?;

            artifacts.push(BundledArtifact {
                package_type,
                paths: vec![path],
                size,
                checksum,
            });
        }

        Ok(artifacts)
    }
}

fn transition(state: &mut BuildState, next: BuildState) {
    debug_assert!(!state.is_terminal(), "{state} is terminal");
    log::debug!("{} → {}", state, next);
    *state = next;
}
