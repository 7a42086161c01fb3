//! File Storage - One JSON File per Key
//!
//! Each key is stored as `<data_dir>/<key>.json` using atomic writes
//! (write to tmp file, then rename). A reader always sees either the
//! old or the new value, never a partial write.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, instrument};

use crate::ports::storage::KeyValueStorage;

/// Directory-backed key-value storage.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Directory holding one file per key.
    data_dir: PathBuf,
}

impl FileStorage {
    /// Create a file store in the given data directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub async fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        let dir = data_dir.as_ref();
        fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;

        Ok(Self {
            data_dir: dir.to_path_buf(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        anyhow::ensure!(
            !key.is_empty()
                && key
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
            "Invalid storage key {key:?}: only [A-Za-z0-9_-] allowed"
        );
        Ok(self.data_dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No file for key");
                Ok(None)
            }
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read {}", path.display()))
            }
        }
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp_path = self.data_dir.join(format!("{key}.json.tmp"));

        fs::write(&tmp_path, value)
            .await
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &path)
            .await
            .with_context(|| format!("Failed to rename onto {}", path.display()))?;

        debug!(path = %path.display(), "Value written");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to remove {}", path.display()))
            }
        }
    }

    async fn is_healthy(&self) -> bool {
        fs::metadata(&self.data_dir)
            .await
            .is_ok_and(|m| m.is_dir() && !m.permissions().readonly())
    }
}
