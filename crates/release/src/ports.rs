//! Port traits for the collaborators the release domain depends on.
//!
//! Infrastructure crates implement these; the domain never performs I/O
//! itself.

use async_trait::async_trait;

use crate::errors::ReleaseError;

/// Captured result of an external command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Captured standard output, lossily decoded as UTF-8.
    pub stdout: String,
    /// Captured standard error, lossily decoded as UTF-8.
    pub stderr: String,
    /// Process exit code; `-1` when the process was terminated by a signal.
    pub exit_code: i32,
}

impl CommandOutput {
    /// Returns `true` when the command exited with code `0`.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Converts a non-zero exit into [`ReleaseError::CommandFailed`].
    ///
    /// `command` is the human-readable command line used in the error.
    pub fn into_success(self, command: &str) -> Result<Self, ReleaseError> {
        if self.success() {
            Ok(self)
        } else {
            Err(ReleaseError::CommandFailed {
                command: command.to_string(),
                exit_code: self.exit_code,
                stderr: self.stderr.trim().to_string(),
            })
        }
    }
}

/// Runs external programs (`git`, `gh`).
///
/// A command that runs and exits non-zero is *not* an error at this layer:
/// the output is returned so callers can inspect `stderr`. Only a failure to
/// start the process is reported as [`ReleaseError::CommandSpawn`].
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args` and captures its output.
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ReleaseError>;
}
