//! Process and git infrastructure adapter.
//!
//! Implements the [`release::CommandRunner`] port on `tokio::process`
//! ([`ProcessRunner`]) and reads commit ranges from `git log` ([`GitLog`]).
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Process spawning, output capture and git argument
//! conventions live here. The [`release`] crate sees only
//! [`release::CommandRunner`] and the raw log text.

pub mod log;
pub mod runner;

pub use log::GitLog;
pub use runner::ProcessRunner;
