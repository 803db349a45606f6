//! Error type for the release domain.
//!
//! The classifier and the eligibility policy never fail: ambiguity is encoded
//! as `None` or `false` in their return values. [`ReleaseError`] covers the
//! operations around them that can: reducing raw `git log` output to commit
//! records, validating workflow inputs, and running external commands through
//! the [`crate::ports::CommandRunner`] port.

use thiserror::Error;

/// Errors produced while preparing input for, or collecting input to, the
/// release decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReleaseError {
    /// A `git log` line did not have the `<sha> <message> [(#id)]` shape.
    ///
    /// Malformed lines abort the batch; they are never skipped silently.
    #[error("Malformed commit line: '{line}'")]
    MalformedCommitLine {
        /// The offending line, with graph decoration stripped.
        line: String,
    },

    /// A pull-request reference was not a positive run of digits that fits
    /// in a `u64`.
    #[error("Invalid pull request id: '{value}'")]
    InvalidPullRequestId {
        /// The rejected value.
        value: String,
    },

    /// A workflow input had a value outside its accepted set.
    #[error("Invalid value for {name}: {value}")]
    InvalidInput {
        /// Input name as declared by the action (e.g. `version-locked`).
        name: String,
        /// The rejected value.
        value: String,
    },

    /// An external command could not be started at all.
    #[error("Failed to run '{command}': {message}")]
    CommandSpawn {
        /// The command line that was attempted.
        command: String,
        /// The operating-system error message.
        message: String,
    },

    /// An external command ran but exited unsuccessfully.
    #[error("'{command}' exited with code {exit_code}: {stderr}")]
    CommandFailed {
        /// The command line that was run.
        command: String,
        /// Process exit code (`-1` when terminated by a signal).
        exit_code: i32,
        /// Captured standard error, trimmed.
        stderr: String,
    },
}
