//! Launch4j execution.

use crate::bundler::{
    Stage,
    error::{Error, Result},
    settings::Settings,
    utils::process,
};
use std::path::Path;

/// Run Launch4j against a generated configuration file.
///
/// Launch4j is started from the configuration's directory. On failure the
/// launcher log next to the executable, if Launch4j wrote one, is appended to
/// the diagnostic.
pub async fn run_launch4j(launch4j: &Path, config_path: &Path, settings: &Settings) -> Result<()> {
    log::info!("Running {}...", launch4j.display());

    let working_dir = config_path.parent().unwrap_or(settings.project_dir());

    let result = process::run_tool(
        Stage::Wrap,
        launch4j,
        &[config_path.into()],
        working_dir,
    )
    .await;

    match result {
        Ok(_) => Ok(()),
        Err(Error::ProcessFailed {
            stage,
            command,
            code,
            mut output,
        }) => {
            let log_path = settings.launcher_log_path();
            if let Ok(log) = tokio::fs::read_to_string(&log_path).await {
                if !log.trim().is_empty() {
                    output.push_str(&format!("\n--- {} ---\n{}", log_path.display(), log.trim_end()));
                }
            }
            Err(Error::ProcessFailed {
                stage,
                command,
                code,
                output,
            })
        }
        Err(e) => Err(e),
    }
}
