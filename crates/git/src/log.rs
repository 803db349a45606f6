//! Reading commit ranges with `git log`.

use release::{CommandRunner, CommitLineParser, CommitRecord, ReleaseError};
use tracing::{debug, instrument};

use crate::runner::render;

/// Arguments that pin the `git log` output shape regardless of repository or
/// user configuration (`log.decorate`, `core.abbrev`, `color.ui`,
/// `log.showSignature`).
const LOG_FORMAT_ARGS: [&str; 8] = [
    "log",
    "--no-decorate",
    "--no-color",
    "--no-show-signature",
    "--abbrev=7",
    "--oneline",
    "--graph",
    "--first-parent",
];

/// Reads the first-parent history between two refs.
///
/// With `--graph --first-parent` every line carries exactly the `* `
/// decoration that [`CommitLineParser`] expects.
#[derive(Debug, Clone)]
pub struct GitLog<R> {
    runner: R,
}

impl<R: CommandRunner> GitLog<R> {
    /// Creates a reader that runs `git` through `runner`.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Returns the raw `git log` output for `base..head`.
    ///
    /// # Errors
    ///
    /// [`ReleaseError::CommandSpawn`] if `git` cannot be started and
    /// [`ReleaseError::CommandFailed`] if it exits non-zero (e.g. an unknown
    /// ref).
    #[instrument(skip(self))]
    pub async fn commit_range(&self, base: &str, head: &str) -> Result<String, ReleaseError> {
        let range = format!("{base}..{head}");
        let mut args = LOG_FORMAT_ARGS.to_vec();
        args.push(range.as_str());

        let output = self
            .runner
            .run("git", &args)
            .await?
            .into_success(&render("git", &args))?;

        debug!(lines = output.stdout.lines().count(), "Read commit range");
        Ok(output.stdout)
    }

    /// Reads `base..head` and parses it into commit records, newest first.
    pub async fn commit_records(
        &self,
        base: &str,
        head: &str,
        parser: &CommitLineParser,
    ) -> Result<Vec<CommitRecord>, ReleaseError> {
        let log = self.commit_range(base, head).await?;
        parser.parse_log(&log)
    }
}
