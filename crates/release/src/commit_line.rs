//! Reduction of `git log --oneline --graph` output to [`CommitRecord`]s.
//!
//! Each line has the shape `<decoration><sha> <message> (#<id>)` where the
//! decoration is the two-character graph marker (`* `) and the PR reference
//! is optional. A line that does not fit this shape is an error: the batch is
//! aborted rather than silently losing a commit.

use std::sync::LazyLock;

use regex::Regex;

use crate::classifier::classify;
use crate::errors::ReleaseError;
use crate::{CommitRecord, CommitSha, PullRequestId, RepositoryId};

/// Default GitHub host used to build pull-request links.
pub const DEFAULT_SERVER_URL: &str = "https://github.com";

/// `git log --graph` decoration in front of each first-parent commit.
const GRAPH_MARKER: &str = "* ";

static WITH_PULL_REQUEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z0-9]{1,8}) (.*) \(#([0-9]+)\)$")
        .expect("pull request line pattern is a valid regex")
});

static WITHOUT_PULL_REQUEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z0-9]{1,8}) (.*)$").expect("plain line pattern is a valid regex")
});

/// Parses decorated log lines for one repository.
#[derive(Debug, Clone)]
pub struct CommitLineParser {
    repository: RepositoryId,
    server_url: String,
}

impl CommitLineParser {
    /// Creates a parser that links pull requests under `server_url`.
    pub fn new(repository: RepositoryId, server_url: impl Into<String>) -> Self {
        Self {
            repository,
            server_url: server_url.into(),
        }
    }

    /// Creates a parser that links pull requests on `github.com`.
    pub fn for_github(repository: RepositoryId) -> Self {
        Self::new(repository, DEFAULT_SERVER_URL)
    }

    /// Returns the repository pull-request links are built for.
    pub fn repository(&self) -> &RepositoryId {
        &self.repository
    }

    /// Parses one decorated log line.
    ///
    /// The line must start with the `* ` graph marker produced by
    /// `git log --graph`.
    ///
    /// # Errors
    ///
    /// [`ReleaseError::MalformedCommitLine`] when the marker is missing or
    /// the line carries no `<sha> <message>` after it, and
    /// [`ReleaseError::InvalidPullRequestId`] when the PR number overflows.
    pub fn parse_line(&self, line: &str) -> Result<CommitRecord, ReleaseError> {
        let Some(commit) = line.strip_prefix(GRAPH_MARKER) else {
            return Err(ReleaseError::MalformedCommitLine {
                line: line.to_string(),
            });
        };

        if let Some(caps) = WITH_PULL_REQUEST.captures(commit) {
            let id: PullRequestId = caps[3].parse()?;
            return self.record(commit, &caps[1], &caps[2], Some(id));
        }

        if let Some(caps) = WITHOUT_PULL_REQUEST.captures(commit) {
            return self.record(commit, &caps[1], &caps[2], None);
        }

        Err(ReleaseError::MalformedCommitLine {
            line: commit.to_string(),
        })
    }

    /// Parses the full stdout of `git log`, skipping blank lines and
    /// preserving order.
    ///
    /// # Errors
    ///
    /// The first malformed line aborts the whole batch.
    pub fn parse_log(&self, log: &str) -> Result<Vec<CommitRecord>, ReleaseError> {
        log.lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| self.parse_line(line))
            .collect()
    }

    fn record(
        &self,
        commit: &str,
        sha: &str,
        title: &str,
        id: Option<PullRequestId>,
    ) -> Result<CommitRecord, ReleaseError> {
        let sha = CommitSha::new(sha).ok_or_else(|| ReleaseError::MalformedCommitLine {
            line: commit.to_string(),
        })?;

        Ok(CommitRecord {
            commit: commit.to_string(),
            title: title.to_string(),
            sha,
            commit_type: classify(title),
            id,
            link: id.map(|id| self.repository.pull_request_url(&self.server_url, id)),
        })
    }
}
