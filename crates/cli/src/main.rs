//! release-actions CLI entry point.
//!
//! This binary is the composition root for the release-management actions.
//! Responsibilities:
//!
//! 1. **Parse configuration**: flags, each with a GitHub Actions environment
//!    fallback (`INPUT_*`, `GITHUB_REPOSITORY`, `GITHUB_SERVER_URL`,
//!    `GITHUB_OUTPUT`).
//! 2. **Wire observability**: configure `tracing-subscriber` (text or JSON,
//!    stderr) and open an `action.run` span tagged with a fresh run id.
//! 3. **Construct infrastructure**: a [`git::ProcessRunner`] for the local
//!    clone, wrapped in a [`git::GitLog`].
//! 4. **Run the action** and emit its outputs. Failures are reported as an
//!    `::error::` workflow command and a non-zero exit code.

mod commands;
mod inputs;
mod output;
mod telemetry;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use release::{ActionRunId, ReleasePolicy, DEFAULT_DEPENDENCY_BUMP_MARKER};
use tracing::{error, info_span, Instrument};

use commands::RangeArgs;
use inputs::{parse_dependency_bump_marker, parse_version_locked};
use output::{escape_command_data, ActionOutputs};
use telemetry::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "release-actions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Commit classification and release eligibility for GitHub Actions", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RELEASE_ACTIONS_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    /// File that action outputs are appended to (stdout when unset)
    #[arg(long, env = "GITHUB_OUTPUT", global = true)]
    github_output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Emit the commits in a range as a JSON list
    CommitList {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Decide whether the commits in a range warrant an automatic release
    ShouldRelease {
        #[command(flatten)]
        range: RangeArgs,

        /// Whether the package version is locked to an upstream dependency (true/false)
        #[arg(long, env = "INPUT_VERSION-LOCKED", action = ArgAction::Set, value_parser = parse_version_locked)]
        version_locked: bool,

        /// Title text marking an upstream dependency bump (case-insensitive)
        #[arg(
            long,
            env = "INPUT_DEPENDENCY-BUMP-MARKER",
            default_value = DEFAULT_DEPENDENCY_BUMP_MARKER,
            value_parser = parse_dependency_bump_marker
        )]
        dependency_bump_marker: String,
    },

    /// Classify a single commit title
    Classify {
        /// Commit title without SHA or pull request reference
        #[arg(env = "INPUT_TITLE")]
        title: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.log_format, cli.verbose);

    let run_id = ActionRunId::new_random();
    let span = info_span!("action.run", run_id = %run_id);

    match run(cli).instrument(span).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = format!("{e:#}");
            error!(run_id = %run_id, error = %message, "Action failed");
            println!("::error::{}", escape_command_data(&message));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let outputs = ActionOutputs::new(cli.github_output);

    match cli.command {
        Commands::CommitList { range } => commands::commit_list(&range, &outputs).await,
        Commands::ShouldRelease {
            range,
            version_locked,
            dependency_bump_marker,
        } => {
            let policy = ReleasePolicy::new(dependency_bump_marker);
            commands::should_release(&range, version_locked, &policy, &outputs).await
        }
        Commands::Classify { title } => commands::classify_title(&title, &outputs),
    }
}
