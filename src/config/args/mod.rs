use crate::Config;
use crate::config::args::value_parser::{bucket, exclude, region};
use crate::config::region::{DEFAULT_REGION, build_regions};
use crate::config::{Command, DEFAULT_S3CMD_PATH, SyncConfig, TracingConfig};
use crate::types::AccessKeys;
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
#[cfg(feature = "version")]
use shadow_rs::shadow;
use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;

mod tests;
mod value_parser;

const DEFAULT_JSON_TRACING: bool = false;
const DEFAULT_SPAN_EVENTS_TRACING: bool = false;
const DEFAULT_DISABLE_COLOR_TRACING: bool = false;
const DEFAULT_DRY_RUN: bool = false;
const DEFAULT_S3CMD_DEBUG: bool = false;
const DEFAULT_S3CMD_VERBOSE: bool = false;

const NO_COMMAND_SPECIFIED: &str = "a command must be specified. see --help\n";
const BUCKET_REQUIRED: &str = "--bucket is required for this command\n";
const FILE_REGISTRY_REQUIRED: &str = "--file-registry is required for this command\n";
const LOG_FILE_REQUIRED: &str = "--log-file is required for this command\n";
const NO_REGION_SPECIFIED: &str = "at least one region must be specified\n";

#[cfg(feature = "version")]
shadow!(build);

#[derive(Parser, Clone, Debug)]
#[command(name = "s3cmd-sync", about = "Mirror a public files directory to S3 in multiple regions, using s3cmd.")]
#[cfg_attr(feature = "version", command(version=format!("{} ({} {}), {}", build::PKG_VERSION, build::SHORT_COMMIT, build::BUILD_TARGET, build::RUST_VERSION)))]
pub struct CLIArgs {
    #[command(subcommand)]
    command: Option<SubCommand>,

    /// bucket name, without s3://
    #[arg(long, env, value_parser = bucket::check_bucket_name, help_heading = "General")]
    bucket: Option<String>,

    /// location of the s3cmd executable
    #[arg(long, env, value_name = "FILE", default_value = DEFAULT_S3CMD_PATH, help_heading = "General")]
    s3cmd_path: PathBuf,

    /// regions to sync to, comma separated or repeated. the same bucket name is used in every region
    #[arg(long, env, value_delimiter = ',', default_value = DEFAULT_REGION, value_parser = region::check_region, help_heading = "General")]
    region: Vec<String>,

    /// A simulation mode. s3cmd is invoked with --dry-run
    #[arg(long, env, default_value_t = DEFAULT_DRY_RUN, help_heading = "General")]
    dry_run: bool,

    /// glob pattern of files that are never uploaded, comma separated or repeated. merged with the built-in excludes
    #[arg(long, env, value_delimiter = ',', value_parser = exclude::check_exclude_pattern, help_heading = "Filtering")]
    exclude: Vec<String>,

    /// access key passed to s3cmd. S3_ACCESS_KEY environment variable takes precedence
    #[arg(long, help_heading = "Credentials")]
    access_key: Option<String>,

    /// secret key passed to s3cmd. S3_SECRET_KEY environment variable takes precedence
    #[arg(long, help_heading = "Credentials")]
    secret_key: Option<String>,

    /// host name used for public urls instead of <bucket>.<region endpoint> (virtual hosting)
    #[arg(long, env, value_parser = NonEmptyStringValueParser::new(), help_heading = "General")]
    common_name: Option<String>,

    /// JSON lines file every executed s3cmd command is stored to
    #[arg(long, env, value_name = "FILE", help_heading = "Storage")]
    log_file: Option<PathBuf>,

    /// JSON file that holds the files registered for a later sync
    #[arg(long, env, value_name = "FILE", help_heading = "Storage")]
    file_registry: Option<PathBuf>,

    /// invoke s3cmd with --debug
    #[arg(long, env, default_value_t = DEFAULT_S3CMD_DEBUG, help_heading = "s3cmd")]
    s3cmd_debug: bool,

    /// invoke s3cmd with --verbose
    #[arg(long, env, default_value_t = DEFAULT_S3CMD_VERBOSE, help_heading = "s3cmd")]
    s3cmd_verbose: bool,

    /// trace verbosity(-v: show info, -vv: show debug, -vvv show trace)
    #[clap(flatten)]
    verbosity: Verbosity<WarnLevel>,

    /// show trace as json format
    #[arg(long, env, default_value_t = DEFAULT_JSON_TRACING, help_heading = "Tracing/Logging")]
    json_tracing: bool,

    /// show span event tracing
    #[arg(long, env, default_value_t = DEFAULT_SPAN_EVENTS_TRACING, help_heading = "Tracing/Logging")]
    span_events_tracing: bool,

    /// disable ANSI terminal colors
    #[arg(long, env, default_value_t = DEFAULT_DISABLE_COLOR_TRACING, help_heading = "Tracing/Logging")]
    disable_color_tracing: bool,

    /// generate a auto completions script. Valid values: bash, fish, zsh, powershell, elvish.
    #[arg(long, env, value_name = "SHELL", value_parser = clap_complete::shells::Shell::from_str, help_heading = "Advanced")]
    auto_complete_shell: Option<clap_complete::shells::Shell>,
}

#[derive(Subcommand, Clone, Debug)]
enum SubCommand {
    /// upload SOURCE/TARGET to s3://<BUCKET>/TARGET in every enabled region
    Sync {
        /// local public files directory
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        source: String,

        /// path below SOURCE. the whole directory is synced when omitted
        #[arg(default_value = "")]
        target: String,
    },

    /// delete s3://<BUCKET>/TARGET in every enabled region. a TARGET ending with / is deleted recursively
    Delete {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        target: String,
    },

    /// [dangerous] delete every object of the bucket in REGION
    Empty {
        #[arg(value_parser = region::check_region)]
        region: String,
    },

    /// register a file (path below the public files directory) for a later sync-registered
    Register {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        uri: String,
    },

    /// sync every registered file below SOURCE and unregister the synced ones
    SyncRegistered {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        source: String,
    },

    /// show the stored s3cmd command log
    ShowLog,

    /// remove every record of the stored s3cmd command log
    PurgeLog,

    /// show the public url of PATH
    Url { path: String },
}

pub fn parse_from_args<I, T>(args: I) -> Result<CLIArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CLIArgs::try_parse_from(args)
}

pub fn build_config_from_args<I, T>(args: I) -> Result<Config, String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config_args = CLIArgs::try_parse_from(args).map_err(|e| e.to_string())?;
    crate::Config::try_from(config_args)
}

impl CLIArgs {
    fn validate_command_config(&self) -> Result<(), String> {
        self.check_command_specified()?;
        self.check_bucket_required()?;
        self.check_file_registry_required()?;
        self.check_log_file_required()?;
        self.check_region_specified()?;

        Ok(())
    }

    fn check_command_specified(&self) -> Result<(), String> {
        if self.command.is_none() && self.auto_complete_shell.is_none() {
            return Err(NO_COMMAND_SPECIFIED.to_string());
        }

        Ok(())
    }

    fn check_bucket_required(&self) -> Result<(), String> {
        let bucket_required = matches!(
            self.command,
            Some(
                SubCommand::Sync { .. }
                    | SubCommand::Delete { .. }
                    | SubCommand::Empty { .. }
                    | SubCommand::SyncRegistered { .. }
                    | SubCommand::Url { .. }
            )
        );
        if bucket_required && self.bucket.is_none() {
            return Err(BUCKET_REQUIRED.to_string());
        }

        Ok(())
    }

    fn check_file_registry_required(&self) -> Result<(), String> {
        let file_registry_required = matches!(
            self.command,
            Some(SubCommand::Register { .. } | SubCommand::SyncRegistered { .. })
        );
        if file_registry_required && self.file_registry.is_none() {
            return Err(FILE_REGISTRY_REQUIRED.to_string());
        }

        Ok(())
    }

    fn check_log_file_required(&self) -> Result<(), String> {
        let log_file_required = matches!(
            self.command,
            Some(SubCommand::ShowLog | SubCommand::PurgeLog)
        );
        if log_file_required && self.log_file.is_none() {
            return Err(LOG_FILE_REQUIRED.to_string());
        }

        Ok(())
    }

    fn check_region_specified(&self) -> Result<(), String> {
        if self.region.is_empty() {
            return Err(NO_REGION_SPECIFIED.to_string());
        }

        Ok(())
    }

    fn build_tracing_config(&self) -> Option<TracingConfig> {
        let tracing_config = self
            .verbosity
            .log_level()
            .map(|log_level| TracingConfig {
                tracing_level: log_level,
                json_tracing: self.json_tracing,
                span_events_tracing: self.span_events_tracing,
                disable_color_tracing: self.disable_color_tracing,
            });

        if !self.dry_run {
            return tracing_config;
        }

        // dry-run output is reported at info level at least
        match tracing_config {
            None => Some(TracingConfig {
                tracing_level: log::Level::Info,
                json_tracing: DEFAULT_JSON_TRACING,
                span_events_tracing: DEFAULT_SPAN_EVENTS_TRACING,
                disable_color_tracing: DEFAULT_DISABLE_COLOR_TRACING,
            }),
            Some(tracing_config) if tracing_config.tracing_level < log::Level::Info => {
                Some(TracingConfig {
                    tracing_level: log::Level::Info,
                    ..tracing_config
                })
            }
            Some(tracing_config) => Some(tracing_config),
        }
    }

    fn build_sync_config(&self) -> SyncConfig {
        let mut excludes: Vec<String> = vec![];
        for exclude in &self.exclude {
            if !excludes.contains(exclude) {
                excludes.push(exclude.clone());
            }
        }

        SyncConfig {
            bucket: self.bucket.clone().unwrap_or_default(),
            s3cmd_path: self.s3cmd_path.clone(),
            regions: build_regions(self.region.as_slice()),
            excludes,
            dry_run: self.dry_run,
            debug: self.s3cmd_debug,
            verbose: self.s3cmd_verbose,
            access_keys: AccessKeys::new(self.access_key.clone(), self.secret_key.clone()),
            common_name: self.common_name.clone(),
        }
    }

    fn build_command(&self) -> Option<Command> {
        let command = match self.command.clone()? {
            SubCommand::Sync { source, target } => Command::Sync { source, target },
            SubCommand::Delete { target } => Command::Delete { target },
            SubCommand::Empty { region } => Command::Empty { region },
            SubCommand::Register { uri } => Command::Register { uri },
            SubCommand::SyncRegistered { source } => Command::SyncRegistered { source },
            SubCommand::ShowLog => Command::ShowLog,
            SubCommand::PurgeLog => Command::PurgeLog,
            SubCommand::Url { path } => Command::Url { path },
        };

        Some(command)
    }
}

impl TryFrom<CLIArgs> for Config {
    type Error = String;

    fn try_from(value: CLIArgs) -> Result<Self, Self::Error> {
        value.validate_command_config()?;

        Ok(Config {
            sync_config: value.build_sync_config(),
            command: value.build_command(),
            tracing_config: value.build_tracing_config(),
            log_file: value.log_file.clone(),
            file_registry: value.file_registry.clone(),
            auto_complete_shell: value.auto_complete_shell,
        })
    }
}
