//! [`CommandRunner`] implementation backed by `tokio::process`.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use release::{CommandOutput, CommandRunner, ReleaseError};
use tokio::process::Command;
use tracing::debug;

/// Runs commands as child processes, optionally inside a working directory.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    working_dir: Option<PathBuf>,
}

impl ProcessRunner {
    /// Creates a runner that executes in the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a runner that executes every command inside `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
        }
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ReleaseError> {
        let command_line = render(program, args);
        let start = Instant::now();

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let output = command
            .output()
            .await
            .map_err(|e| ReleaseError::CommandSpawn {
                command: command_line.clone(),
                message: e.to_string(),
            })?;

        let exit_code = output.status.code().unwrap_or(-1);
        debug!(
            command = %command_line,
            exit_code,
            duration_ms = start.elapsed().as_millis() as u64,
            "Command finished"
        );

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code,
        })
    }
}

/// Renders a command line for logs and error messages.
pub(crate) fn render(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
