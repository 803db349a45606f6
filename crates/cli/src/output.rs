//! GitHub Actions output emission.
//!
//! Outputs are appended to the file named by `GITHUB_OUTPUT`. Single-line
//! values use `name=value`; values containing line breaks use the heredoc
//! form `name<<delimiter` with a random delimiter. Without `GITHUB_OUTPUT`
//! the same text goes to stdout, which keeps the binary usable locally.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::debug;
use uuid::Uuid;

/// Destination for action outputs.
#[derive(Debug, Clone)]
pub struct ActionOutputs {
    file: Option<PathBuf>,
}

impl ActionOutputs {
    /// Writes to `file` when given, otherwise to stdout.
    pub fn new(file: Option<PathBuf>) -> Self {
        Self { file }
    }

    /// Sets output `name` to `value`.
    pub fn set(&self, name: &str, value: &str) -> Result<()> {
        let entry = format_output(name, value, || format!("ghadelimiter_{}", Uuid::new_v4()))?;

        match &self.file {
            Some(path) => {
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("Failed to open output file {}", path.display()))?;
                file.write_all(entry.as_bytes())
                    .with_context(|| format!("Failed to write output '{name}'"))?;
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(entry.as_bytes())
                    .with_context(|| format!("Failed to write output '{name}'"))?;
            }
        }

        debug!(output = name, bytes = value.len(), "Output set");
        Ok(())
    }
}

/// Renders one output entry, including its trailing newline.
fn format_output(name: &str, value: &str, delimiter: impl FnOnce() -> String) -> Result<String> {
    if !value.contains(['\n', '\r']) {
        return Ok(format!("{name}={value}\n"));
    }

    let delimiter = delimiter();
    if name.contains(&delimiter) || value.contains(&delimiter) {
        bail!("Unexpected input: output '{name}' contains the delimiter {delimiter}");
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

/// Escapes a message for a workflow command such as `::error::`.
pub fn escape_command_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
