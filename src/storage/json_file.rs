//! JSON file backend
//!
//! The whole collection lives in a single pretty-printed JSON array. Reads
//! parse the full file; writes serialize the collection to a `.tmp` sibling
//! and rename it over the original, so readers and crashes only ever see a
//! complete file. A file that does not exist yet reads as an empty
//! collection, and its parent directory is created on the first write.
//!
//! # Storage Format
//!
//! ```text
//! data/
//! └── properties.json     # [ { "id": 1, "title": ..., "type": "Flat", ... }, ... ]
//! ```

use crate::core::{Property, PropertyBackend, StorageError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed implementation of `PropertyBackend`
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling the collection is staged in before it replaces `path`
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read_error(&self, message: impl ToString) -> StorageError {
        StorageError::ReadFailed {
            resource: self.describe(),
            message: message.to_string(),
        }
    }

    fn write_error(&self, message: impl ToString) -> StorageError {
        StorageError::WriteFailed {
            resource: self.describe(),
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl PropertyBackend for JsonFileBackend {
    async fn read_all(&self) -> Result<Vec<Property>, StorageError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Data file absent, collection is empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.read_error(e)),
        };

        serde_json::from_str(&content).map_err(|e| self.read_error(e))
    }

    async fn write_all(&self, properties: &[Property]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.write_error(e))?;
        }

        let content = serde_json::to_string_pretty(properties).map_err(|e| self.write_error(e))?;
        let staging = self.staging_path();
        tokio::fs::write(&staging, content)
            .await
            .map_err(|e| self.write_error(e))?;

        if let Err(e) = tokio::fs::rename(&staging, &self.path).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(self.write_error(e));
        }
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
