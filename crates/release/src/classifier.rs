//! Conventional-commit classification of commit titles.
//!
//! [`classify`] maps a commit title (SHA and trailing `(#id)` already removed)
//! to a [`CommitType`]. Well-formed headers yield their declared type; titles
//! that only start with `Merge`, `Revert` or `Release` fall back to that
//! word; anything else is unclassifiable and yields `None`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::types::{CommitType, BREAKING_MARKER};

/// `type(scope)!: description`. `type` may also be the literal
/// `BREAKING CHANGE`.
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(BREAKING CHANGE|\w*)(?:\(([\w$.\-*,/ ]*)\))?(!)?: (.*)$")
        .expect("header pattern is a valid regex")
});

/// GitHub's default merge-commit subject.
static MERGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Merge pull request #(\d+) from (.*)$").expect("merge pattern is a valid regex")
});

/// First words that classify a non-conventional title.
const FALLBACK_WORDS: [&str; 3] = ["Merge", "Revert", "Release"];

/// Structural reading of a commit header.
#[derive(Debug, PartialEq, Eq)]
enum Header<'a> {
    /// A conventional header with a non-empty type.
    Conventional {
        kind: &'a str,
        scope: Option<&'a str>,
    },
    /// A GitHub merge-commit subject. Merge headers carry no type.
    Merge { id: &'a str, source: &'a str },
    /// Anything else.
    Freeform,
}

fn parse_header(title: &str) -> Header<'_> {
    if let Some(caps) = MERGE_PATTERN.captures(title) {
        if let (Some(id), Some(source)) = (caps.get(1), caps.get(2)) {
            return Header::Merge {
                id: id.as_str(),
                source: source.as_str(),
            };
        }
    }

    match HEADER_PATTERN.captures(title) {
        Some(caps) => match caps.get(1).map(|m| m.as_str()) {
            Some(kind) if !kind.is_empty() => Header::Conventional {
                kind,
                scope: caps.get(2).map(|m| m.as_str()),
            },
            _ => Header::Freeform,
        },
        None => Header::Freeform,
    }
}

/// Returns `true` if the header segment before the first `:` contains the
/// breaking marker.
fn has_breaking_marker(title: &str) -> bool {
    let head = title.split_once(':').map_or(title, |(head, _)| head);
    head.contains(BREAKING_MARKER)
}

/// Classifies a commit title.
///
/// Never fails; an unrecognisable title yields `None`.
///
/// ```
/// use release::classify;
///
/// assert_eq!(classify("feat(api)!: drop v1").unwrap().as_str(), "feat!");
/// assert_eq!(classify("Revert \"fix: typo\"").unwrap().as_str(), "revert");
/// assert!(classify("wip").is_none());
/// ```
pub fn classify(title: &str) -> Option<CommitType> {
    match parse_header(title) {
        Header::Conventional { kind, scope } => {
            let commit_type = CommitType::new(kind, has_breaking_marker(title));
            if let Some(t) = &commit_type {
                if !t.is_canonical() {
                    debug!(commit_type = %t, scope = ?scope, "Non-canonical conventional type");
                }
            }
            commit_type
        }
        Header::Merge { id, source } => {
            debug!(pull_request = id, source, "Merge commit header");
            fallback(title)
        }
        Header::Freeform => fallback(title),
    }
}

fn fallback(title: &str) -> Option<CommitType> {
    let first = title.split_whitespace().next()?;
    if FALLBACK_WORDS.contains(&first) {
        CommitType::new(first, false)
    } else {
        debug!(title, "Unclassifiable commit title");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(title: &str) -> Option<String> {
        classify(title).map(|t| t.as_str().to_string())
    }

    #[test]
    fn canonical_types_unscoped_and_scoped() {
        for t in [
            "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style",
            "test",
        ] {
            assert_eq!(kind(&format!("{t}: description")).as_deref(), Some(t));
            assert_eq!(kind(&format!("{t}(scope): description")).as_deref(), Some(t));
        }
    }

    #[test]
    fn breaking_marker_is_preserved() {
        assert_eq!(kind("feat(scope)!: description").as_deref(), Some("feat!"));
        assert_eq!(kind("fix!: description").as_deref(), Some("fix!"));
    }

    #[test]
    fn type_is_lowercased() {
        assert_eq!(kind("FEAT: shout").as_deref(), Some("feat"));
        assert_eq!(kind("Fix(Core)!: mixed").as_deref(), Some("fix!"));
    }

    #[test]
    fn breaking_change_token_is_recognised() {
        assert_eq!(
            kind("BREAKING CHANGE: drop node 14").as_deref(),
            Some("breaking change")
        );
    }

    #[test]
    fn scope_accepts_extended_characters() {
        assert_eq!(
            kind("fix(packages/axe-core, $deps.*-x): thing").as_deref(),
            Some("fix")
        );
    }

    #[test]
    fn fallback_words() {
        assert_eq!(
            kind("Merge pull request #5 from branch").as_deref(),
            Some("merge")
        );
        assert_eq!(kind("Merge branch 'develop'").as_deref(), Some("merge"));
        assert_eq!(kind("Revert \"feat: thing\"").as_deref(), Some("revert"));
        assert_eq!(kind("Release v4.8.0").as_deref(), Some("release"));
    }

    #[test]
    fn fallback_words_are_case_sensitive() {
        assert_eq!(kind("merge branch 'develop'"), None);
        assert_eq!(kind("RELEASE v1"), None);
    }

    #[test]
    fn unclassifiable_titles() {
        assert_eq!(kind("this is not a valid commit type"), None);
        assert_eq!(kind(""), None);
        assert_eq!(kind("feat:missing space"), None);
        assert_eq!(kind("(scope): no type"), None);
    }

    #[test]
    fn merge_header_captures_id_and_source() {
        assert_eq!(
            parse_header("Merge pull request #5 from org/branch"),
            Header::Merge {
                id: "5",
                source: "org/branch"
            }
        );
    }

    #[test]
    fn classification_is_repeatable() {
        let title = "feat(scope)!: description";
        assert_eq!(classify(title), classify(title));
    }
}
