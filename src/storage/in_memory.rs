//! In-memory implementation of PropertyBackend for testing and development

use crate::core::{Property, PropertyBackend, StorageError};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory property backend
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
/// Clones share the same collection.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    properties: Arc<RwLock<Vec<Property>>>,
}

impl InMemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-populated with `properties`
    pub fn with_properties(properties: Vec<Property>) -> Self {
        Self {
            properties: Arc::new(RwLock::new(properties)),
        }
    }
}

#[async_trait]
impl PropertyBackend for InMemoryBackend {
    async fn read_all(&self) -> Result<Vec<Property>, StorageError> {
        let properties = self
            .properties
            .read()
            .map_err(|e| StorageError::ReadFailed {
                resource: self.describe(),
                message: format!("Failed to acquire read lock: {}", e),
            })?;

        Ok(properties.clone())
    }

    async fn write_all(&self, properties: &[Property]) -> Result<(), StorageError> {
        let mut stored = self
            .properties
            .write()
            .map_err(|e| StorageError::WriteFailed {
                resource: self.describe(),
                message: format!("Failed to acquire write lock: {}", e),
            })?;

        *stored = properties.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
