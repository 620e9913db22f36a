#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use s3cmd_sync::command::runner::ProcessRunner;
use s3cmd_sync::config::SyncConfig;
use s3cmd_sync::config::region::build_regions;
use s3cmd_sync::s3cmd::S3cmd;
use s3cmd_sync::secrets::StaticSecretStore;
use s3cmd_sync::types::token::SyncCancellationToken;

pub const BUCKET: &str = "mybucket";

const INVOCATIONS_FILE_NAME: &str = "invocations";

/// A scratch directory with a fake s3cmd shell script.
///
/// The script appends its arguments to `invocations`, one line per run, and prints them.
/// It exits with status 1 when its arguments contain `fail_on`, and sleeps when they contain `sleep_on`.
pub struct TestHelper {
    temp_dir: TempDir,
}

impl TestHelper {
    pub fn new() -> Self {
        Self::with_script_options("__never__", "__never__")
    }

    pub fn with_script_options(fail_on: &str, sleep_on: &str) -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        let helper = Self { temp_dir };

        let script = format!(
            r#"#!/bin/sh
echo "$@" >> '{invocations}'
case "$*" in
  *{sleep_on}*) sleep 30 ;;
esac
case "$*" in
  *{fail_on}*) echo "ERROR: S3 error: 403 (AccessDenied)" >&2; exit 1 ;;
esac
echo "done: $*"
"#,
            invocations = helper.invocations_path().display(),
        );
        std::fs::write(helper.s3cmd_path(), script).unwrap();
        std::fs::set_permissions(helper.s3cmd_path(), std::fs::Permissions::from_mode(0o755))
            .unwrap();

        helper
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn s3cmd_path(&self) -> PathBuf {
        self.temp_dir.path().join("s3cmd")
    }

    fn invocations_path(&self) -> PathBuf {
        self.temp_dir.path().join(INVOCATIONS_FILE_NAME)
    }

    pub fn invocations(&self) -> Vec<String> {
        match std::fs::read_to_string(self.invocations_path()) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => vec![],
        }
    }

    pub fn sync_config(&self, regions: &[&str]) -> SyncConfig {
        SyncConfig {
            bucket: BUCKET.to_string(),
            s3cmd_path: self.s3cmd_path(),
            regions: build_regions(regions),
            ..Default::default()
        }
    }

    pub fn build_s3cmd(
        &self,
        sync_config: SyncConfig,
        cancellation_token: SyncCancellationToken,
    ) -> S3cmd {
        S3cmd::new(
            sync_config,
            Box::new(StaticSecretStore::new()),
            Box::new(ProcessRunner::new(cancellation_token)),
        )
    }

    pub fn init_dummy_tracing_subscriber() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("dummy=trace")
            .try_init();
    }
}
