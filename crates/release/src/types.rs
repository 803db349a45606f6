//! Shared value types for the release domain.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types carry
//! the data the release decision is computed from.

use serde::{Deserialize, Serialize};

use crate::{CommitSha, PullRequestId};

// ---------------------------------------------------------------------------
// Commit type
// ---------------------------------------------------------------------------

/// Conventional-commit types recognised for documentation and validation.
///
/// The classifier does not treat this as a closed set: any word-character
/// type in a well-formed header is accepted.
pub const CANONICAL_TYPES: [&str; 12] = [
    "build",
    "chore",
    "ci",
    "docs",
    "feat",
    "fix",
    "perf",
    "refactor",
    "revert",
    "style",
    "test",
    "breaking change",
];

/// Marker appended to a type that announces a breaking change.
pub const BREAKING_MARKER: char = '!';

/// The classified type of a commit, e.g. `feat`, `fix!`, `merge`.
///
/// Always lowercase. A trailing `!` marks a breaking change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitType(String);

impl CommitType {
    /// Creates a commit type from `kind`, lowercasing it and appending the
    /// breaking marker when `breaking` is set.
    ///
    /// Returns `None` if `kind` is empty.
    pub fn new(kind: &str, breaking: bool) -> Option<Self> {
        if kind.is_empty() {
            return None;
        }
        let mut value = kind.to_lowercase();
        if breaking {
            value.push(BREAKING_MARKER);
        }
        Some(Self(value))
    }

    /// Returns the type as a string slice, including any breaking marker.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the type carries the breaking marker anywhere.
    pub fn is_breaking(&self) -> bool {
        self.0.contains(BREAKING_MARKER)
    }

    /// Returns `true` if the type string begins with `prefix`.
    ///
    /// Prefix matching deliberately includes breaking variants: `feat!`
    /// starts with `feat`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Returns `true` if the type, without any breaking marker, is one of
    /// [`CANONICAL_TYPES`].
    pub fn is_canonical(&self) -> bool {
        let base = self.0.trim_end_matches(BREAKING_MARKER);
        CANONICAL_TYPES.contains(&base)
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Commit record
// ---------------------------------------------------------------------------

/// One commit from the release range, reduced from a `git log` line.
///
/// `link` is present if and only if `id` is. Absent values serialise as
/// `null`, never as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// The raw log line with the graph decoration stripped.
    pub commit: String,

    /// The commit message without the short SHA and trailing `(#id)`.
    pub title: String,

    /// Abbreviated commit SHA.
    pub sha: CommitSha,

    /// Classified conventional-commit type, or `None` if unclassifiable.
    #[serde(rename = "type")]
    pub commit_type: Option<CommitType>,

    /// Number of the pull request that introduced the commit, if referenced.
    pub id: Option<PullRequestId>,

    /// Absolute URL of that pull request.
    pub link: Option<String>,
}

impl CommitRecord {
    /// Returns the classified type as a string slice, if any.
    pub fn type_str(&self) -> Option<&str> {
        self.commit_type.as_ref().map(CommitType::as_str)
    }
}
