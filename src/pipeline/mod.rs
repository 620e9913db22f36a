use anyhow::Result;
use tracing::{error, info, trace, warn};

use crate::s3cmd::S3cmd;
use crate::storage::file::FileStorage;
use crate::storage::log::{LogStorage, insert_executed_commands};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegisteredSyncSummary {
    pub synced: u64,
    pub failed: u64,
}

impl RegisteredSyncSummary {
    pub fn has_error(&self) -> bool {
        0 < self.failed
    }
}

/// Syncs every registered file below `source`, one after another.
///
/// A record is removed from the registry only after its sync succeeded.
/// Failed files stay registered and are retried by the next run.
pub async fn sync_registered_files(
    s3cmd: &S3cmd,
    files: &(dyn FileStorage + Send + Sync),
    log: Option<&(dyn LogStorage + Send + Sync)>,
    source: &str,
) -> Result<RegisteredSyncSummary> {
    let mut summary = RegisteredSyncSummary::default();

    let records = files.get_all().await?;
    trace!(count = records.len(), "registered files loaded.");

    for record in records {
        let result = s3cmd.sync(source, &record.uri).await;

        if let Some(log) = log {
            insert_executed_commands(log, &result.executed_commands).await?;
        }

        if !result.is_success() {
            error!(id = record.id, uri = record.uri.as_str(), "sync failed.");
            summary.failed += 1;
            continue;
        }

        if !files.delete(record.id).await? {
            warn!(
                id = record.id,
                "registered file has already been removed by another process."
            );
        }
        summary.synced += 1;
    }

    info!(
        synced = summary.synced,
        failed = summary.failed,
        "registered files sync completed."
    );

    Ok(summary)
}
