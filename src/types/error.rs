use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum S3cmdSyncError {
    #[error("s3cmd not found: {0}")]
    BinaryNotFound(PathBuf),
    #[error("source must be specified.")]
    EmptySource,
    #[error("target must be specified.")]
    EmptyTarget,
    #[error("region must be specified.")]
    EmptyRegion,
    #[error("no region enabled.")]
    NoRegionEnabled,
    #[error("cancelled")]
    Cancelled,
    #[error("s3cmd exited with status {0}")]
    CommandFailed(i32),
    #[error("s3cmd terminated by signal")]
    CommandTerminated,
}
