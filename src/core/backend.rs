//! Storage interface behind the property store

use crate::core::error::StorageError;
use crate::core::property::Property;
use async_trait::async_trait;

/// Whole-collection persistence for property records
///
/// Implementations read and write the full collection in storage order.
/// There is no incremental append: every write replaces the stored
/// collection. A backend that has never been written to reads as empty.
#[async_trait]
pub trait PropertyBackend: Send + Sync {
    /// Read every stored record
    async fn read_all(&self) -> Result<Vec<Property>, StorageError>;

    /// Replace the stored collection
    async fn write_all(&self, properties: &[Property]) -> Result<(), StorageError>;

    /// Human-readable name of the backing resource, used in logs
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyBackend;

    #[async_trait]
    impl PropertyBackend for EmptyBackend {
        async fn read_all(&self) -> Result<Vec<Property>, StorageError> {
            Ok(Vec::new())
        }

        async fn write_all(&self, _properties: &[Property]) -> Result<(), StorageError> {
            Ok(())
        }

        fn describe(&self) -> String {
            "empty".to_string()
        }
    }

    #[tokio::test]
    async fn test_backend_is_object_safe() {
        let backend: Box<dyn PropertyBackend> = Box::new(EmptyBackend);
        assert!(backend.read_all().await.unwrap().is_empty());
        assert!(backend.write_all(&[]).await.is_ok());
        assert_eq!(backend.describe(), "empty");
    }
}
