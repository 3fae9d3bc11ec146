//! External tool execution.
//!
//! Tools run to completion with no timeout. Their stdout and stderr are read
//! concurrently and echoed line by line through the `log` facade so nothing
//! the tool prints is hidden from the user. A non-zero exit becomes
//! [`Error::ProcessFailed`] carrying the tool's own diagnostic output.

use crate::bundler::{
    Stage,
    error::{Error, Result},
};
use std::{ffi::OsString, path::Path, process::Stdio};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

/// Lines captured from a finished tool.
#[derive(Debug, Default)]
pub struct ToolOutput {
    /// Captured stdout lines
    pub stdout: Vec<String>,
    /// Captured stderr lines
    pub stderr: Vec<String>,
}

impl ToolOutput {
    /// The most useful diagnostic text: stderr, falling back to stdout.
    pub fn diagnostic(&self) -> String {
        let lines = if self.stderr.is_empty() {
            &self.stdout
        } else {
            &self.stderr
        };
        if lines.is_empty() {
            "(the tool produced no output)".to_string()
        } else {
            lines.join("\n")
        }
    }
}

/// Renders a command line for logs and error messages.
pub fn display_command(program: &Path, args: &[OsString]) -> String {
    let mut command = program.display().to_string();
    for arg in args {
        command.push(' ');
        command.push_str(&arg.to_string_lossy());
    }
    command
}

/// Runs `program` with `args` in `current_dir` and waits for it to exit.
///
/// # Errors
///
/// - [`Error::CommandFailed`] if the process cannot be spawned or awaited
/// - [`Error::ProcessFailed`] if it exits unsuccessfully
pub async fn run_tool(
    stage: Stage,
    program: &Path,
    args: &[OsString],
    current_dir: &Path,
) -> Result<ToolOutput> {
    let command = display_command(program, args);
    log::debug!("[{}] running {}", stage, command);

    let mut child = Command::new(program)
        .args(args)
        .current_dir(current_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|error| Error::CommandFailed {
            command: command.clone(),
            error,
        })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    // Both streams must be drained before waiting, or a chatty tool can block
    // on a full pipe.
    let (stdout, stderr) = tokio::join!(
        collect_lines(stdout, stage, false),
        collect_lines(stderr, stage, true)
    );

    let status = child.wait().await.map_err(|error| Error::CommandFailed {
        command: command.clone(),
        error,
    })?;

    let output = ToolOutput { stdout, stderr };

    if !status.success() {
        return Err(Error::ProcessFailed {
            stage,
            command,
            code: status.code(),
            output: output.diagnostic(),
        });
    }

    Ok(output)
}

/// Reads `stream` to EOF, one line at a time.
///
/// Lines are decoded lossily: tools print in the platform code page, and the
/// pipe must stay open until the tool exits or it dies on a closed pipe.
async fn collect_lines<R>(stream: Option<R>, stage: Stage, is_stderr: bool) -> Vec<String>
where
    R: AsyncRead + Unpin,
{
    let mut captured = Vec::new();
    let Some(stream) = stream else {
        return captured;
    };

    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                log::warn!("[{}] failed to read tool output: {}", stage, e);
                break;
            }
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']).to_string();
        if is_stderr {
            log::warn!("[{}] {}", stage, line);
        } else {
            log::info!("[{}] {}", stage, line);
        }
        captured.push(line);
    }
    captured
}
