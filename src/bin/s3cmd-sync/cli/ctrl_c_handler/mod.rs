use tokio::task::JoinHandle;
use tokio::{select, signal};
use tracing::{debug, error, warn};

use s3cmd_sync::types::token::SyncCancellationToken;

/// Cancels `cancellation_token` on ctrl-c.
///
/// `ProcessRunner` watches the same token, so the s3cmd child of the current region is killed
/// and the remaining regions are not started.
pub fn spawn_ctrl_c_handler(cancellation_token: SyncCancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        select! {
            _ = cancellation_token.cancelled() => {
                debug!("s3cmd runs cancelled, ctrl-c handler stopped.");
            }
            result = signal::ctrl_c() => {
                if let Err(e) = result {
                    error!("failed to listen for ctrl-c signal: {e}");
                    return;
                }

                warn!("ctrl-c received, killing the running s3cmd process.");
                cancellation_token.cancel();
            }
        }
    })
}
