//! Action implementations: read inputs, run the domain logic, set outputs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use git::{GitLog, ProcessRunner};
use release::{classify, CommitLineParser, CommitRecord, ReleasePolicy, RepositoryId};
use tracing::info;

use crate::inputs::parse_repository;
use crate::output::ActionOutputs;

/// The commit range and repository an action operates on.
#[derive(Debug, Clone, Args)]
pub struct RangeArgs {
    /// Base ref; commits reachable from it are excluded
    #[arg(long, env = "INPUT_BASE")]
    pub base: String,

    /// Head ref
    #[arg(long, env = "INPUT_HEAD", default_value = "HEAD")]
    pub head: String,

    /// Repository in `owner/repo` form, used to build pull request links
    #[arg(long, env = "GITHUB_REPOSITORY", value_parser = parse_repository)]
    pub repository: RepositoryId,

    /// GitHub server URL, used to build pull request links
    #[arg(long, env = "GITHUB_SERVER_URL", default_value = release::DEFAULT_SERVER_URL)]
    pub server_url: String,

    /// Local clone to run git in
    #[arg(long, default_value = ".")]
    pub repo_dir: PathBuf,
}

impl RangeArgs {
    async fn commit_records(&self) -> Result<Vec<CommitRecord>> {
        let parser = CommitLineParser::new(self.repository.clone(), self.server_url.as_str());
        GitLog::new(ProcessRunner::in_dir(&self.repo_dir))
            .commit_records(&self.base, &self.head, &parser)
            .await
            .with_context(|| format!("Failed to read commits {}..{}", self.base, self.head))
    }
}

/// `commit-list`: sets `commit-list` to the JSON array of commit records.
pub async fn commit_list(range: &RangeArgs, outputs: &ActionOutputs) -> Result<()> {
    let records = range.commit_records().await?;
    info!(commits = records.len(), "Commit list generated");

    let json = serde_json::to_string(&records).context("Failed to serialise commit list")?;
    outputs.set("commit-list", &json)
}

/// `should-release`: sets `should-release` to `true` or `false`.
pub async fn should_release(
    range: &RangeArgs,
    version_locked: bool,
    policy: &ReleasePolicy,
    outputs: &ActionOutputs,
) -> Result<()> {
    let records = range.commit_records().await?;
    let decision = policy.evaluate(&records, version_locked);

    outputs.set("should-release", &decision.is_release().to_string())
}

/// `classify`: sets `type` to the classified type, or empty.
pub fn classify_title(title: &str, outputs: &ActionOutputs) -> Result<()> {
    let commit_type = classify(title);
    info!(title, commit_type = ?commit_type, "Title classified");

    let value = commit_type.as_ref().map_or("", |t| t.as_str());
    outputs.set("type", value)
}
