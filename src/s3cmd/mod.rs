use anyhow::{Result, anyhow};
use chrono::Utc;
use tracing::{debug, error, info, trace};

use crate::command::runner::CommandRunner;
use crate::command::{CommandInvocation, OptionValue};
use crate::config::SyncConfig;
use crate::config::region::{DEFAULT_REGION, Region};
use crate::secrets::{SecretStore, resolve_access_keys};
use crate::types::error::S3cmdSyncError;
use crate::types::{ExecutedCommand, LogSeverity, OperationResult, S3cmdOperation};

/// Patterns that are never uploaded, in addition to the configured excludes.
pub const DEFAULT_EXCLUDES: &[&str] = &[".htaccess", "*.php", "php/*", "config__*", "README.txt"];

/// Builds s3cmd invocations from a [`SyncConfig`] and runs them once per enabled region.
///
/// Every public operation returns an [`OperationResult`]. Failures are logged and reported
/// through [`OperationResult::success`], they are never returned as errors.
pub struct S3cmd {
    config: SyncConfig,
    secret_store: Box<dyn SecretStore + Send + Sync>,
    runner: Box<dyn CommandRunner + Send + Sync>,
}

impl S3cmd {
    pub fn new(
        config: SyncConfig,
        secret_store: Box<dyn SecretStore + Send + Sync>,
        runner: Box<dyn CommandRunner + Send + Sync>,
    ) -> Self {
        Self {
            config,
            secret_store,
            runner,
        }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Uploads `source` + `target` to `s3://<bucket>/<target>` in every enabled region.
    ///
    /// `source` is the local public files directory (or a file), `target` the path below it.
    pub async fn sync(&self, source: &str, target: &str) -> OperationResult {
        if source.is_empty() {
            error!("{}", S3cmdSyncError::EmptySource);
            return OperationResult::failure();
        }

        let mut invocation = CommandInvocation::new();
        invocation
            .set_option("region", DEFAULT_REGION)
            .set_flag("delete-removed")
            .set_flag("acl-public")
            .set_flag("no-mime-magic")
            .set_flag("stop-on-error")
            .set_flag("stats")
            .set_option("exclude", self.build_excludes())
            .set_parameter(&build_local_path(source, target))
            .set_parameter(&self.config.target_url(target));

        self.execute_in_enabled_regions(S3cmdOperation::Sync, invocation)
            .await
    }

    /// Removes `s3://<bucket>/<target>` in every enabled region.
    pub async fn delete(&self, target: &str) -> OperationResult {
        if target.trim_start_matches('/').is_empty() {
            error!("{}", S3cmdSyncError::EmptyTarget);
            return OperationResult::failure();
        }

        let mut invocation = CommandInvocation::new();
        invocation.set_option("region", DEFAULT_REGION);
        if target.ends_with('/') {
            invocation.set_flag("recursive");
        }
        invocation.set_parameter(&self.config.target_url(target));

        self.execute_in_enabled_regions(S3cmdOperation::Delete, invocation)
            .await
    }

    /// Deletes every object of the bucket in one region.
    pub async fn empty(&self, region_code: &str) -> OperationResult {
        if region_code.is_empty() {
            error!("{}", S3cmdSyncError::EmptyRegion);
            return OperationResult::failure();
        }

        let mut invocation = CommandInvocation::new();
        invocation
            .set_option("region", region_code)
            .set_flag("recursive")
            .set_flag("force")
            .set_parameter(&self.config.bucket_url());

        let mut result = OperationResult {
            severity: self.config.log_severity(),
            ..Default::default()
        };
        let executed = self.execute(S3cmdOperation::Delete, &invocation).await;
        if let Err(e) = record(&mut result, executed) {
            error!(region = region_code, "s3cmd del failed: {e:#}");
            return fail(result, e);
        }

        result.success = true;
        result
    }

    /// The configured excludes followed by [`DEFAULT_EXCLUDES`], without duplicates.
    pub fn build_excludes(&self) -> Vec<String> {
        let mut excludes: Vec<String> = vec![];
        for exclude in self
            .config
            .excludes
            .iter()
            .map(String::as_str)
            .chain(DEFAULT_EXCLUDES.iter().copied())
        {
            let exclude = exclude.trim();
            if !exclude.is_empty() && !excludes.iter().any(|known| known == exclude) {
                excludes.push(exclude.to_string());
            }
        }
        excludes
    }

    async fn execute_in_enabled_regions(
        &self,
        operation: S3cmdOperation,
        mut invocation: CommandInvocation,
    ) -> OperationResult {
        let mut result = OperationResult {
            severity: self.config.log_severity(),
            ..Default::default()
        };

        let regions: Vec<&Region> = self.config.enabled_regions().collect();
        if regions.is_empty() {
            error!("{}", S3cmdSyncError::NoRegionEnabled);
            return fail(result, anyhow!(S3cmdSyncError::NoRegionEnabled));
        }

        // `region` keeps the position of the placeholder set by the caller
        for region in regions {
            invocation.set_option("region", region.code.as_str());

            let executed = self.execute(operation, &invocation).await;
            if let Err(e) = record(&mut result, executed) {
                error!(
                    region = region.code.as_str(),
                    "s3cmd {operation} failed: {e:#}"
                );
                return fail(result, e);
            }
        }

        invocation.reset();
        result.success = true;

        result
    }

    async fn execute(
        &self,
        operation: S3cmdOperation,
        invocation: &CommandInvocation,
    ) -> Result<ExecutedCommand> {
        let s3cmd_path = &self.config.s3cmd_path;
        if !s3cmd_path.is_file() {
            return Err(anyhow!(S3cmdSyncError::BinaryNotFound(s3cmd_path.clone())));
        }

        let mut invocation = invocation.clone();
        if self.config.dry_run {
            invocation.set_flag("dry-run");
        }
        if self.config.debug {
            invocation.set_flag("debug");
        }
        if self.config.verbose {
            invocation.set_flag("verbose");
        }

        let access_keys = resolve_access_keys(self.secret_store.as_ref(), &self.config.access_keys);
        if let Some(access_key) = access_keys.access_key.as_ref() {
            invocation.set_option("access_key", OptionValue::Value(access_key.clone()));
        }
        if let Some(secret_key) = access_keys.secret_key.as_ref() {
            invocation.set_option("secret_key", OptionValue::Value(secret_key.clone()));
        }

        let region = match invocation.option("region") {
            Some(OptionValue::Value(region)) => Some(region.clone()),
            _ => None,
        };
        let command_line = invocation.render(s3cmd_path, operation);
        let args = invocation.to_args(operation);

        trace!(
            operation = operation.as_str(),
            region = region.as_deref(),
            "s3cmd started."
        );

        let start_time = Utc::now();
        let command_output = self.runner.run(s3cmd_path, &args).await?;
        let end_time = Utc::now();

        let output = command_output.combined();
        match self.config.log_severity() {
            LogSeverity::Debug => debug!(region = region.as_deref(), "{output}"),
            _ => info!(region = region.as_deref(), "{output}"),
        }

        Ok(ExecutedCommand {
            region,
            command_line,
            output,
            start_time,
            end_time,
            status: command_output.status,
            success: command_output.success(),
        })
    }
}

/// Adds an execution to `result`. An execution that ran but did not succeed is kept and reported as error.
fn record(result: &mut OperationResult, executed: Result<ExecutedCommand>) -> Result<()> {
    let executed_command = executed?;
    let status = executed_command.status;
    let success = executed_command.success;
    result.push(executed_command);

    if success {
        return Ok(());
    }

    Err(anyhow!(match status {
        Some(status) => S3cmdSyncError::CommandFailed(status),
        None => S3cmdSyncError::CommandTerminated,
    }))
}

fn fail(mut result: OperationResult, e: anyhow::Error) -> OperationResult {
    if !result.output.is_empty() {
        result.output.push('\n');
    }
    result.output.push_str(&format!("{e:#}"));
    result.success = false;
    result.severity = LogSeverity::Error;
    result
}

fn build_local_path(source: &str, target: &str) -> String {
    let target = target.trim_start_matches('/');
    if target.is_empty() {
        return source.to_string();
    }

    if source.ends_with('/') {
        format!("{source}{target}")
    } else {
        format!("{source}/{target}")
    }
}
