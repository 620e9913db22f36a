use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::trace;

use crate::types::ExecutedCommand;

pub const REDACTED_CREDENTIAL: &str = "********";

static CREDENTIAL_OPTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // the value is one shell word: single quoted (with '\'' escapes), double quoted or bare
    Regex::new(r#"(--(?:access|secret)[_-]key(?:=|\s+))('(?:[^']|'\\'')*'|"(?:[^"\\]|\\.)*"|\S+)"#)
        .unwrap()
});

/// Replaces the values of `--access_key` and `--secret_key` in a command line.
pub fn redact_credentials(command_line: &str) -> String {
    CREDENTIAL_OPTION_REGEX
        .replace_all(command_line, format!("${{1}}{REDACTED_CREDENTIAL}"))
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: u64,
    pub command: String,
    pub output: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[async_trait]
pub trait LogStorage {
    /// Stores one executed command. Credentials in `command` are redacted before writing.
    async fn insert(
        &self,
        command: &str,
        output: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<u64>;

    async fn get_all(&self) -> Result<Vec<LogRecord>>;

    async fn purge(&self) -> Result<()>;
}

pub async fn insert_executed_commands(
    log_storage: &(dyn LogStorage + Send + Sync),
    executed_commands: &[ExecutedCommand],
) -> Result<()> {
    for executed_command in executed_commands {
        log_storage
            .insert(
                &executed_command.command_line,
                &executed_command.output,
                executed_command.start_time,
                executed_command.end_time,
            )
            .await?;
    }
    Ok(())
}

/// Log records stored as one JSON object per line.
pub struct JsonLinesLogStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonLinesLogStorage {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    async fn read_records(&self) -> Result<Vec<LogRecord>> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(vec![]);
        }

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.path.display()))?;

        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str::<LogRecord>(line)
                    .with_context(|| format!("broken log record in {}", self.path.display()))
            })
            .collect()
    }
}

#[async_trait]
impl LogStorage for JsonLinesLogStorage {
    async fn insert(
        &self,
        command: &str,
        output: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<u64> {
        let _guard = self.lock.lock().await;

        let id = self
            .read_records()
            .await?
            .last()
            .map_or(1, |record| record.id + 1);

        let record = LogRecord {
            id,
            command: redact_credentials(command),
            output: output.to_string(),
            start_time,
            end_time,
        };
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("failed to open {}", self.path.display()))?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        trace!(id = id, "log record inserted.");

        Ok(id)
    }

    async fn get_all(&self) -> Result<Vec<LogRecord>> {
        let _guard = self.lock.lock().await;
        self.read_records().await
    }

    async fn purge(&self) -> Result<()> {
        let _guard = self.lock.lock().await;

        if tokio::fs::try_exists(&self.path).await? {
            tokio::fs::write(&self.path, b"")
                .await
                .with_context(|| format!("failed to purge {}", self.path.display()))?;
        }

        trace!("log records purged.");

        Ok(())
    }
}
