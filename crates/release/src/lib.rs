//! Release domain for the release-management actions.
//!
//! This crate turns raw `git log` lines into typed commit records and decides,
//! from those records, whether an automatic release is warranted. Everything
//! here is pure; infrastructure crates implement the [`ports`] traits.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`CommitSha`, `PullRequestId`, `RepositoryId`, `ActionRunId`) |
//! | [`types`] | `CommitType` and `CommitRecord` |
//! | [`classifier`] | Conventional-commit classification of a commit title |
//! | [`commit_line`] | Reduction of `git log --graph` lines to `CommitRecord`s |
//! | [`eligibility`] | The release eligibility policy |
//! | [`ports`] | Collaborator traits (`CommandRunner`) |
//! | [`errors`] | `ReleaseError` |

pub mod classifier;
pub mod commit_line;
pub mod eligibility;
pub mod errors;
pub mod identifiers;
pub mod ports;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use classifier::classify;
pub use commit_line::{CommitLineParser, DEFAULT_SERVER_URL};
pub use eligibility::{
    should_auto_release, ReleaseDecision, ReleasePolicy, DEFAULT_DEPENDENCY_BUMP_MARKER,
};
pub use errors::ReleaseError;
pub use identifiers::{ActionRunId, CommitSha, PullRequestId, RepositoryId};
pub use ports::{CommandOutput, CommandRunner};
pub use types::{CommitRecord, CommitType, BREAKING_MARKER, CANONICAL_TYPES};
