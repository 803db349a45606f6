//! Release eligibility: should an automatic release be cut for this range?
//!
//! Two regimes apply depending on whether the package version is locked to an
//! upstream dependency's version.
//!
//! - **Unlocked**: any `feat*` or `fix*` commit is enough.
//! - **Locked**: only plain `feat`/`fix` commits qualify, and a single
//!   breaking change or upstream dependency bump anywhere in the range vetoes
//!   the release. The scan is one forward pass with early return on veto.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{CommitRecord, CommitSha};

/// Default title marker for a commit that bumps the pinned upstream
/// dependency.
pub const DEFAULT_DEPENDENCY_BUMP_MARKER: &str = "update axe-core to";

/// Outcome of a release evaluation, with the reason it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "decision")]
pub enum ReleaseDecision {
    /// A release should be cut.
    Release,
    /// The commit range was empty.
    NoCommits,
    /// No commit qualified for a release.
    NoReleasableCommits,
    /// A breaking change vetoed a version-locked release.
    BreakingChange {
        /// The vetoing commit.
        sha: CommitSha,
    },
    /// An upstream dependency bump vetoed a version-locked release.
    DependencyBump {
        /// The vetoing commit.
        sha: CommitSha,
    },
}

impl ReleaseDecision {
    /// Returns `true` only for [`ReleaseDecision::Release`].
    pub fn is_release(&self) -> bool {
        matches!(self, Self::Release)
    }
}

/// Release eligibility rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePolicy {
    dependency_bump_marker: Option<String>,
}

impl Default for ReleasePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_DEPENDENCY_BUMP_MARKER)
    }
}

impl ReleasePolicy {
    /// Creates a policy that treats titles containing `marker`
    /// (case-insensitive) as upstream dependency bumps.
    ///
    /// An empty or whitespace-only marker disables the dependency-bump veto
    /// instead of matching every title.
    pub fn new(marker: impl Into<String>) -> Self {
        let marker = marker.into();
        let dependency_bump_marker = if marker.trim().is_empty() {
            None
        } else {
            Some(marker.to_lowercase())
        };
        Self {
            dependency_bump_marker,
        }
    }

    /// Returns the lowercased dependency-bump marker, if the veto is enabled.
    pub fn dependency_bump_marker(&self) -> Option<&str> {
        self.dependency_bump_marker.as_deref()
    }

    /// Evaluates `commits` under the given lock state.
    pub fn evaluate(&self, commits: &[CommitRecord], is_version_locked: bool) -> ReleaseDecision {
        let decision = if commits.is_empty() {
            ReleaseDecision::NoCommits
        } else if is_version_locked {
            self.evaluate_locked(commits)
        } else {
            evaluate_unlocked(commits)
        };

        info!(
            commits = commits.len(),
            version_locked = is_version_locked,
            ?decision,
            "Release eligibility evaluated"
        );
        decision
    }

    fn evaluate_locked(&self, commits: &[CommitRecord]) -> ReleaseDecision {
        let mut releasable = false;

        for commit in commits {
            let Some(commit_type) = &commit.commit_type else {
                continue;
            };

            if commit_type.is_breaking() {
                debug!(sha = %commit.sha, commit_type = %commit_type, "Breaking change vetoes release");
                return ReleaseDecision::BreakingChange {
                    sha: commit.sha.clone(),
                };
            }

            if commit_type.starts_with("feat") && self.is_dependency_bump(&commit.title) {
                debug!(sha = %commit.sha, title = %commit.title, "Dependency bump vetoes release");
                return ReleaseDecision::DependencyBump {
                    sha: commit.sha.clone(),
                };
            }

            if matches!(commit_type.as_str(), "feat" | "fix") {
                releasable = true;
            }
        }

        if releasable {
            ReleaseDecision::Release
        } else {
            ReleaseDecision::NoReleasableCommits
        }
    }

    fn is_dependency_bump(&self, title: &str) -> bool {
        self.dependency_bump_marker
            .as_deref()
            .is_some_and(|marker| title.to_lowercase().contains(marker))
    }
}

fn evaluate_unlocked(commits: &[CommitRecord]) -> ReleaseDecision {
    let releasable = commits.iter().any(|commit| {
        commit
            .commit_type
            .as_ref()
            .is_some_and(|t| t.starts_with("feat") || t.starts_with("fix"))
    });

    if releasable {
        ReleaseDecision::Release
    } else {
        ReleaseDecision::NoReleasableCommits
    }
}

/// Decides whether to release using the default [`ReleasePolicy`].
pub fn should_auto_release(commits: &[CommitRecord], is_version_locked: bool) -> bool {
    ReleasePolicy::default()
        .evaluate(commits, is_version_locked)
        .is_release()
}
