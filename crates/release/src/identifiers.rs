//! Newtype domain identifiers.
//!
//! A short commit SHA, a pull-request number and a repository slug are all
//! plain strings or integers on the wire. Wrapping each one keeps them from
//! being swapped by accident and puts their validation in one place.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ReleaseError;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers: String-backed (Git / GitHub names)
// ---------------------------------------------------------------------------

string_id! {
    /// An abbreviated Git commit SHA as printed by `git log --oneline`.
    ///
    /// The commit line parser only produces values of 1–8 lowercase
    /// alphanumeric characters.
    CommitSha
}

string_id! {
    /// Identifies a GitHub repository in `"owner/repo"` format.
    RepositoryId
}

impl RepositoryId {
    /// Builds the absolute URL of pull request `id` in this repository.
    ///
    /// `server_url` is the GitHub host root (e.g. `https://github.com`); a
    /// trailing slash is tolerated.
    pub fn pull_request_url(&self, server_url: &str, id: PullRequestId) -> String {
        format!(
            "{}/{}/pull/{}",
            server_url.trim_end_matches('/'),
            self.0,
            id
        )
    }
}

// ---------------------------------------------------------------------------
// Identifiers: GitHub-integer-backed
// ---------------------------------------------------------------------------

/// Identifies a GitHub Pull Request by its number.
///
/// Serialised as a string of digits (`"42"`) because that is the shape
/// downstream workflow steps read from the `commit-list` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PullRequestId(u64);

impl PullRequestId {
    /// Creates a new identifier from a raw integer.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::str::FromStr for PullRequestId {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ReleaseError::InvalidPullRequestId {
                value: s.to_string(),
            });
        }
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| ReleaseError::InvalidPullRequestId {
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for PullRequestId {
    type Error = ReleaseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PullRequestId> for String {
    fn from(id: PullRequestId) -> Self {
        id.0.to_string()
    }
}

impl std::fmt::Display for PullRequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Identifiers: UUID-backed (internally generated)
// ---------------------------------------------------------------------------

/// Identifies a single action invocation.
///
/// Generated fresh for every CLI invocation and attached to the root tracing
/// span so all activity from a single run can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionRunId(Uuid);

impl ActionRunId {
    /// Generates a new random run identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying [`Uuid`].
    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for ActionRunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_ids_reject_empty_values() {
        assert!(CommitSha::new("").is_none());
        assert_eq!(CommitSha::new("abc1234").unwrap().as_str(), "abc1234");
    }

    #[test]
    fn pull_request_id_parses_digits_only() {
        assert_eq!("42".parse::<PullRequestId>().unwrap().as_u64(), 42);
        assert!("".parse::<PullRequestId>().is_err());
        assert!("#42".parse::<PullRequestId>().is_err());
        assert!("-1".parse::<PullRequestId>().is_err());
    }

    #[test]
    fn pull_request_id_serialises_as_string() {
        let json = serde_json::to_string(&PullRequestId::new(7)).unwrap();
        assert_eq!(json, "\"7\"");

        let back: PullRequestId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(back, PullRequestId::new(7));
    }

    #[test]
    fn pull_request_url_tolerates_trailing_slash() {
        let repo = RepositoryId::new("owner/repo").unwrap();
        let id = PullRequestId::new(12);
        assert_eq!(
            repo.pull_request_url("https://github.com/", id),
            "https://github.com/owner/repo/pull/12"
        );
        assert_eq!(
            repo.pull_request_url("https://ghe.example.com", id),
            "https://ghe.example.com/owner/repo/pull/12"
        );
    }

    #[test]
    fn run_ids_are_unique() {
        assert_ne!(ActionRunId::new_random(), ActionRunId::new_random());
    }
}
