use std::path::PathBuf;

use crate::config::region::{DEFAULT_REGION, Region, build_regions};
use crate::types::{AccessKeys, LogSeverity};

pub mod args;
pub mod region;

pub const DEFAULT_S3CMD_PATH: &str = "/usr/bin/s3cmd";

#[derive(Debug, Clone)]
pub struct Config {
    pub sync_config: SyncConfig,
    pub command: Option<Command>,
    pub tracing_config: Option<TracingConfig>,
    pub log_file: Option<PathBuf>,
    pub file_registry: Option<PathBuf>,
    pub auto_complete_shell: Option<clap_complete::shells::Shell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Sync { source: String, target: String },
    Delete { target: String },
    Empty { region: String },
    Register { uri: String },
    SyncRegistered { source: String },
    ShowLog,
    PurgeLog,
    Url { path: String },
}

#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub bucket: String,
    pub s3cmd_path: PathBuf,
    pub regions: Vec<Region>,
    pub excludes: Vec<String>,
    pub dry_run: bool,
    pub debug: bool,
    pub verbose: bool,
    pub access_keys: AccessKeys,
    pub common_name: Option<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            bucket: String::new(),
            s3cmd_path: PathBuf::from(DEFAULT_S3CMD_PATH),
            regions: build_regions(&[DEFAULT_REGION]),
            excludes: vec![],
            dry_run: false,
            debug: false,
            verbose: false,
            access_keys: AccessKeys::default(),
            common_name: None,
        }
    }
}

impl SyncConfig {
    pub fn enabled_regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(|region| region.enabled)
    }

    pub fn log_severity(&self) -> LogSeverity {
        LogSeverity::from_mode_flags(self.dry_run, self.debug, self.verbose)
    }

    pub fn bucket_url(&self) -> String {
        format!("s3://{}", self.bucket)
    }

    pub fn target_url(&self, target: &str) -> String {
        format!("s3://{}/{}", self.bucket, target.trim_start_matches('/'))
    }

    pub fn public_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if let Some(common_name) = self.common_name.as_ref() {
            return format!("https://{common_name}/{path}");
        }

        let endpoint = self
            .enabled_regions()
            .next()
            .map_or("s3.amazonaws.com", |region| region.endpoint.as_str());
        format!("https://{}.{endpoint}/{path}", self.bucket)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TracingConfig {
    pub tracing_level: log::Level,
    pub json_tracing: bool,
    pub span_events_tracing: bool,
    pub disable_color_tracing: bool,
}
