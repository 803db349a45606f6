//! Parsers for workflow inputs that need more than a string.

use release::{ReleaseError, RepositoryId};

/// Parses the `version-locked` input: `true` or `false`, case-insensitive.
pub fn parse_version_locked(value: &str) -> Result<bool, ReleaseError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ReleaseError::InvalidInput {
            name: "version-locked".to_string(),
            value: value.to_string(),
        }),
    }
}

/// Parses the `dependency-bump-marker` input, rejecting blank values.
pub fn parse_dependency_bump_marker(value: &str) -> Result<String, ReleaseError> {
    if value.trim().is_empty() {
        return Err(ReleaseError::InvalidInput {
            name: "dependency-bump-marker".to_string(),
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}

/// Parses an `owner/repo` slug as provided in `GITHUB_REPOSITORY`.
pub fn parse_repository(value: &str) -> Result<RepositoryId, ReleaseError> {
    let invalid = || ReleaseError::InvalidInput {
        name: "repository".to_string(),
        value: value.to_string(),
    };

    match value.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            RepositoryId::new(value).ok_or_else(invalid)
        }
        _ => Err(invalid()),
    }
}
