use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use git::{GitLog, ProcessRunner};
use release::{
    CommandOutput, CommandRunner, CommitLineParser, PullRequestId, ReleaseError, RepositoryId,
};

/// Records every invocation and replies with a canned output.
struct FakeRunner {
    reply: CommandOutput,
    calls: Mutex<Vec<String>>,
}

impl FakeRunner {
    fn replying(stdout: &str, exit_code: i32, stderr: &str) -> Self {
        Self {
            reply: CommandOutput {
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
                exit_code,
            },
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CommandRunner for &FakeRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ReleaseError> {
        let mut line = vec![program];
        line.extend_from_slice(args);
        self.calls.lock().unwrap().push(line.join(" "));
        Ok(self.reply.clone())
    }
}

fn parser() -> CommitLineParser {
    CommitLineParser::for_github(RepositoryId::new("owner/repo").unwrap())
}

#[tokio::test]
async fn requests_first_parent_graph_for_range() {
    let runner = FakeRunner::replying("", 0, "");
    GitLog::new(&runner)
        .commit_range("v1.0.0", "develop")
        .await
        .unwrap();

    assert_eq!(
        *runner.calls.lock().unwrap(),
        [
            "git log --no-decorate --no-color --no-show-signature --abbrev=7 --oneline --graph --first-parent v1.0.0..develop"
        ]
    );
}

#[tokio::test]
async fn parses_records_from_log_output() {
    let runner = FakeRunner::replying(
        "* abc1234 feat: add rule (#10)\n* def5678 Release v1.2.0\n",
        0,
        "",
    );

    let records = GitLog::new(&runner)
        .commit_records("main", "develop", &parser())
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, Some(PullRequestId::new(10)));
    assert_eq!(records[1].type_str(), Some("release"));
}

#[tokio::test]
async fn non_zero_exit_is_command_failed() {
    let runner = FakeRunner::replying("", 128, "fatal: ambiguous argument 'nope'\n");

    let err = GitLog::new(&runner)
        .commit_range("main", "nope")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ReleaseError::CommandFailed {
            command: "git log --no-decorate --no-color --no-show-signature --abbrev=7 \
                      --oneline --graph --first-parent main..nope"
                .to_string(),
            exit_code: 128,
            stderr: "fatal: ambiguous argument 'nope'".to_string(),
        }
    );
}

#[tokio::test]
async fn malformed_output_aborts_parsing() {
    let runner = FakeRunner::replying("* not-a-sha!\n", 0, "");

    let err = GitLog::new(&runner)
        .commit_records("main", "develop", &parser())
        .await
        .unwrap_err();

    assert!(matches!(err, ReleaseError::MalformedCommitLine { .. }));
}

// ---------------------------------------------------------------------------
// Real git repository
// ---------------------------------------------------------------------------

fn run_git(repo_dir: &Path, args: &[&str]) -> String {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(repo_dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn make_git_repo() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    run_git(dir.path(), &["init"]);
    run_git(dir.path(), &["config", "user.name", "test-user"]);
    run_git(dir.path(), &["config", "user.email", "test@example.com"]);
    run_git(dir.path(), &["config", "commit.gpgsign", "false"]);
    run_git(dir.path(), &["commit", "--allow-empty", "-m", "initial"]);
    dir
}

#[tokio::test]
async fn reads_range_from_real_repository() {
    let repo = make_git_repo();
    let base = run_git(repo.path(), &["rev-parse", "HEAD"]);
    run_git(
        repo.path(),
        &["commit", "--allow-empty", "-m", "fix(parser): handle tabs (#7)"],
    );
    run_git(
        repo.path(),
        &["commit", "--allow-empty", "-m", "feat!: new output format (#8)"],
    );

    let records = GitLog::new(ProcessRunner::in_dir(repo.path()))
        .commit_records(&base, "HEAD", &parser())
        .await
        .unwrap();

    let types: Vec<_> = records.iter().map(|r| r.type_str()).collect();
    assert_eq!(types, [Some("feat!"), Some("fix")]);
    assert_eq!(records[1].id, Some(PullRequestId::new(7)));
    assert_eq!(records[1].title, "fix(parser): handle tabs");
}

#[tokio::test]
async fn output_shape_ignores_repository_log_config() {
    let repo = make_git_repo();
    let base = run_git(repo.path(), &["rev-parse", "HEAD"]);
    run_git(repo.path(), &["commit", "--allow-empty", "-m", "fix: a (#7)"]);

    run_git(repo.path(), &["config", "log.decorate", "short"]);
    run_git(repo.path(), &["config", "core.abbrev", "12"]);
    run_git(repo.path(), &["config", "color.ui", "always"]);
    run_git(repo.path(), &["config", "log.showSignature", "true"]);

    let records = GitLog::new(ProcessRunner::in_dir(repo.path()))
        .commit_records(&base, "HEAD", &parser())
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "fix: a");
    assert_eq!(records[0].type_str(), Some("fix"));
    assert_eq!(records[0].id, Some(PullRequestId::new(7)));
    assert!(records[0].sha.as_str().len() <= 8);
}
