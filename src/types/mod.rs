use std::fmt;
use std::fmt::{Debug, Formatter};

use chrono::{DateTime, Utc};
use zeroize_derive::{Zeroize, ZeroizeOnDrop};

use crate::storage::log::redact_credentials;

pub mod error;
pub mod token;

pub const REDACTED: &str = "** redacted **";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum S3cmdOperation {
    Sync,
    Delete,
}

impl S3cmdOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sync => "sync",
            Self::Delete => "del",
        }
    }
}

impl fmt::Display for S3cmdOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity the captured s3cmd output is reported with.
///
/// `Notice` is reported through `tracing::info!`, there is no notice level in tracing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogSeverity {
    Debug,
    #[default]
    Notice,
    Error,
}

impl LogSeverity {
    pub fn from_mode_flags(dry_run: bool, debug: bool, verbose: bool) -> Self {
        if dry_run || debug || verbose {
            Self::Debug
        } else {
            Self::Notice
        }
    }
}

#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct AccessKeys {
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

impl AccessKeys {
    pub fn new(access_key: Option<String>, secret_key: Option<String>) -> Self {
        Self {
            access_key,
            secret_key,
        }
    }
}

impl Debug for AccessKeys {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut keys = f.debug_struct("AccessKeys");
        let access_key = self.access_key.as_ref().map_or("None", |_| REDACTED);
        let secret_key = self.secret_key.as_ref().map_or("None", |_| REDACTED);
        keys.field("access_key", &access_key)
            .field("secret_key", &secret_key);
        keys.finish()
    }
}

/// One s3cmd process run, kept so that callers can persist it.
///
/// `command_line` holds the credentials as they were passed to s3cmd.
/// Use [`crate::storage::log::LogStorage`] to persist it, the store redacts them.
#[derive(Clone)]
pub struct ExecutedCommand {
    pub region: Option<String>,
    pub command_line: String,
    pub output: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: Option<i32>,
    pub success: bool,
}

impl Debug for ExecutedCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutedCommand")
            .field("region", &self.region)
            .field("command_line", &redact_credentials(&self.command_line))
            .field("output", &self.output)
            .field("start_time", &self.start_time)
            .field("end_time", &self.end_time)
            .field("status", &self.status)
            .field("success", &self.success)
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct OperationResult {
    pub success: bool,
    pub output: String,
    pub severity: LogSeverity,
    pub executed_commands: Vec<ExecutedCommand>,
}

impl OperationResult {
    pub fn failure() -> Self {
        Self {
            success: false,
            severity: LogSeverity::Error,
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn invocation_count(&self) -> usize {
        self.executed_commands.len()
    }

    pub(crate) fn push(&mut self, executed_command: ExecutedCommand) {
        if !executed_command.output.is_empty() {
            if !self.output.is_empty() {
                self.output.push('\n');
            }
            self.output.push_str(&executed_command.output);
        }
        self.executed_commands.push(executed_command);
    }
}
