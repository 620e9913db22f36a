/*!
# Overview
s3cmd-sync mirrors a web application's public files directory to an S3 bucket in one or more AWS regions.
It does not talk to S3 itself. Every transfer is delegated to the external `s3cmd` tool, one invocation per enabled region.

## Features
- Multi-region
  The same bucket name is synced to every enabled region, sequentially.
  A failure in one region stops the remaining regions, so a partially synced bucket is always reported as failure.

- Safe defaults
  Server-side scripts and configuration files (`.htaccess`, `*.php`, the `php/` directory, `config__*`, `README.txt`) are never uploaded.
  Configured excludes are merged with this list, they never replace it.

- Credentials stay secret
  Credentials from the environment (`S3_ACCESS_KEY`, `S3_SECRET_KEY`) win over the configured ones.
  They are redacted in debug output and in the stored command log.

- Deferred sync
  Files can be registered and synced later in one batch with `sync-registered`.
  A file stays registered until its sync succeeded.

## As a library
s3cmd-sync CLI is a very thin wrapper of the s3cmd-sync library.

Example usage
=============

```Toml
[dependencies]
s3cmd-sync = "0.3"
tokio = { version = "1", features = ["full"] }
```

```no_run
use s3cmd_sync::command::runner::ProcessRunner;
use s3cmd_sync::config::Config;
use s3cmd_sync::config::args::parse_from_args;
use s3cmd_sync::s3cmd::S3cmd;
use s3cmd_sync::secrets::EnvSecretStore;
use s3cmd_sync::types::token::create_sync_cancellation_token;

#[tokio::main]
async fn main() {
    // The first argument is the program name, as in std::env::args().
    let args = vec![
        "program_name",
        "--bucket",
        "mybucket",
        "--region",
        "us-east-1,eu-west-1",
        "sync",
        "/var/www/files/",
        "styles/photo.jpg",
    ];

    let config = Config::try_from(parse_from_args(args).unwrap()).unwrap();

    let cancellation_token = create_sync_cancellation_token();
    let s3cmd = S3cmd::new(
        config.sync_config.clone(),
        Box::new(EnvSecretStore::new()),
        Box::new(ProcessRunner::new(cancellation_token)),
    );

    let result = s3cmd.sync("/var/www/files/", "styles/photo.jpg").await;
    if !result.is_success() {
        println!("sync failed: {}", result.output);
    }
}
```

For more examples,
=============
see [s3cmd-sync binary source code](src/bin/s3cmd-sync).
*/

pub use config::Config;
pub use config::args::CLIArgs;

pub mod command;
pub mod config;
pub mod pipeline;
pub mod s3cmd;
pub mod secrets;
pub mod storage;
pub mod types;
