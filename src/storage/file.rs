use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: u64,
    pub uri: String,
    pub created: DateTime<Utc>,
}

/// Registry of files waiting to be synchronized.
#[async_trait]
pub trait FileStorage {
    /// Registers `uri` and returns its id. An already registered uri keeps its id.
    async fn insert(&self, uri: &str) -> Result<u64>;

    async fn delete(&self, id: u64) -> Result<bool>;

    async fn exists(&self, id: u64) -> Result<bool>;

    async fn get_all(&self) -> Result<Vec<FileRecord>>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct FileRegistry {
    next_id: u64,
    files: BTreeMap<u64, FileRecord>,
}

/// File registry stored as a single JSON document.
///
/// Every change rewrites the document into a temporary file next to it and renames it into place.
pub struct JsonFileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStorage {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<FileRegistry> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(FileRegistry::default());
        }

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(FileRegistry::default());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("broken file registry {}", self.path.display()))
    }

    async fn save(&self, registry: &FileRegistry) -> Result<()> {
        let directory = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let temp_file =
            NamedTempFile::new_in(&directory).context("NamedTempFile::new_in failed.")?;
        tokio::fs::write(temp_file.path(), serde_json::to_vec_pretty(registry)?)
            .await
            .context("failed to write file registry.")?;
        temp_file
            .persist(&self.path)
            .map_err(|e| e.error)
            .with_context(|| format!("failed to persist {}", self.path.display()))?;

        Ok(())
    }
}

#[async_trait]
impl FileStorage for JsonFileStorage {
    async fn insert(&self, uri: &str) -> Result<u64> {
        let _guard = self.lock.lock().await;
        let mut registry = self.load().await?;

        if let Some(record) = registry.files.values().find(|record| record.uri == uri) {
            return Ok(record.id);
        }

        registry.next_id += 1;
        let id = registry.next_id;
        registry.files.insert(
            id,
            FileRecord {
                id,
                uri: uri.to_string(),
                created: Utc::now(),
            },
        );
        self.save(&registry).await?;

        trace!(id = id, uri = uri, "file registered.");

        Ok(id)
    }

    async fn delete(&self, id: u64) -> Result<bool> {
        let _guard = self.lock.lock().await;
        let mut registry = self.load().await?;

        if registry.files.remove(&id).is_none() {
            return Ok(false);
        }
        self.save(&registry).await?;

        trace!(id = id, "file unregistered.");

        Ok(true)
    }

    async fn exists(&self, id: u64) -> Result<bool> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.files.contains_key(&id))
    }

    async fn get_all(&self) -> Result<Vec<FileRecord>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.files.into_values().collect())
    }
}
