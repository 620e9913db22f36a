use anyhow::{Result, anyhow};
use tokio::time::Instant;
use tracing::{error, info, trace};

use s3cmd_sync::Config;
use s3cmd_sync::command::runner::ProcessRunner;
use s3cmd_sync::config::Command;
use s3cmd_sync::pipeline::sync_registered_files;
use s3cmd_sync::s3cmd::S3cmd;
use s3cmd_sync::secrets::EnvSecretStore;
use s3cmd_sync::storage::file::{FileStorage, JsonFileStorage};
use s3cmd_sync::storage::log::{JsonLinesLogStorage, LogStorage, insert_executed_commands};
use s3cmd_sync::types::OperationResult;
use s3cmd_sync::types::token::create_sync_cancellation_token;

mod ctrl_c_handler;

pub async fn run(config: Config) -> Result<()> {
    let Some(command) = config.command.clone() else {
        return Err(anyhow!("no command specified."));
    };

    let cancellation_token = create_sync_cancellation_token();
    ctrl_c_handler::spawn_ctrl_c_handler(cancellation_token.clone());

    let start_time = Instant::now();
    trace!(command = ?command, "s3cmd-sync start.");

    let s3cmd = S3cmd::new(
        config.sync_config.clone(),
        Box::new(EnvSecretStore::new()),
        Box::new(ProcessRunner::new(cancellation_token.clone())),
    );
    let log_storage = config
        .log_file
        .as_deref()
        .map(JsonLinesLogStorage::new);

    let success = match command {
        Command::Sync { source, target } => {
            let result = s3cmd.sync(&source, &target).await;
            store_result(log_storage.as_ref(), &result).await?
        }
        Command::Delete { target } => {
            let result = s3cmd.delete(&target).await;
            store_result(log_storage.as_ref(), &result).await?
        }
        Command::Empty { region } => {
            let result = s3cmd.empty(&region).await;
            store_result(log_storage.as_ref(), &result).await?
        }
        Command::Register { uri } => {
            let file_storage = build_file_storage(&config)?;
            let id = file_storage.insert(&uri).await?;
            info!(id = id, uri = uri.as_str(), "file registered.");
            println!("{id}");
            true
        }
        Command::SyncRegistered { source } => {
            let file_storage = build_file_storage(&config)?;
            let summary = sync_registered_files(
                &s3cmd,
                &file_storage,
                log_storage
                    .as_ref()
                    .map(|log_storage| log_storage as &(dyn LogStorage + Send + Sync)),
                &source,
            )
            .await?;
            !summary.has_error()
        }
        Command::ShowLog => {
            let log_storage = log_storage.ok_or_else(|| anyhow!("--log-file is required."))?;
            for record in log_storage.get_all().await? {
                println!("{}", serde_json::to_string(&record)?);
            }
            true
        }
        Command::PurgeLog => {
            let log_storage = log_storage.ok_or_else(|| anyhow!("--log-file is required."))?;
            log_storage.purge().await?;
            info!("log purged.");
            true
        }
        Command::Url { path } => {
            println!("{}", s3cmd.config().public_url(&path));
            true
        }
    };

    let duration_sec = format!("{:.3}", start_time.elapsed().as_secs_f32());
    if !success {
        error!(duration_sec = duration_sec, "s3cmd-sync failed.");

        return Err(anyhow!("s3cmd-sync failed."));
    }

    trace!(duration_sec = duration_sec, "s3cmd-sync has been completed.");

    Ok(())
}

fn build_file_storage(config: &Config) -> Result<JsonFileStorage> {
    let file_registry = config
        .file_registry
        .as_deref()
        .ok_or_else(|| anyhow!("--file-registry is required."))?;

    Ok(JsonFileStorage::new(file_registry))
}

async fn store_result(
    log_storage: Option<&JsonLinesLogStorage>,
    result: &OperationResult,
) -> Result<bool> {
    if let Some(log_storage) = log_storage {
        insert_executed_commands(log_storage, &result.executed_commands).await?;
    }

    Ok(result.is_success())
}
