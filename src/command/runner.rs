use std::path::Path;
use std::process::Stdio;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::{trace, warn};

use crate::types::error::S3cmdSyncError;
use crate::types::token::SyncCancellationToken;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// stdout lines followed by stderr lines, blank lines dropped.
    pub fn combined(&self) -> String {
        self.stdout
            .lines()
            .chain(self.stderr.lines())
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect::<Vec<&str>>()
            .join("\n")
    }
}

#[async_trait]
pub trait CommandRunner {
    async fn run(&self, program: &Path, args: &[String]) -> Result<CommandOutput>;
}

/// Runs the command as a child process and waits for it.
///
/// The child is killed when the cancellation token is cancelled.
pub struct ProcessRunner {
    cancellation_token: SyncCancellationToken,
}

impl ProcessRunner {
    pub fn new(cancellation_token: SyncCancellationToken) -> Self {
        Self { cancellation_token }
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &Path, args: &[String]) -> Result<CommandOutput> {
        if self.cancellation_token.is_cancelled() {
            return Err(anyhow!(S3cmdSyncError::Cancelled));
        }

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {}", program.display()))?;

        trace!(pid = child.id(), "s3cmd process spawned.");

        tokio::select! {
            output = child.wait_with_output() => {
                let output = output.context("failed to wait for s3cmd process.")?;
                Ok(CommandOutput {
                    status: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                })
            }
            _ = self.cancellation_token.cancelled() => {
                warn!("s3cmd process has been killed by cancellation.");
                Err(anyhow!(S3cmdSyncError::Cancelled))
            }
        }
    }
}
