//! Property store: durable custody of the listing collection
//!
//! The store is constructed once per process over an injected
//! [`PropertyBackend`] and shared by handle (`Arc<PropertyStore>`). Callers
//! only ever receive owned snapshots of the collection.
//!
//! # Concurrency
//!
//! Reads run concurrently with each other and with appends. Appends are
//! serialized by `append_guard`, held across the whole read → assign id →
//! write sequence, so two appends in this process can never observe the
//! same maximum id. Writers in *other* processes sharing the same backing
//! resource are not coordinated with.
//!
//! The write runs in its own task that owns the guard. When the I/O
//! deadline expires the caller gets [`StorageError::Timeout`], but the write
//! keeps going and the next append waits until it has landed. A write
//! timeout therefore means "outcome unknown", not "nothing was written".

use crate::core::backend::PropertyBackend;
use crate::core::error::{ListingResult, StorageError, StorageOperation};
use crate::core::filter::{FilterSpec, filter_properties};
use crate::core::property::{Property, PropertyId, PropertyInput};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Default deadline for a single backend call
pub const DEFAULT_IO_TIMEOUT: Duration = Duration::from_secs(5);

/// Owner of the canonical property collection
pub struct PropertyStore {
    backend: Arc<dyn PropertyBackend>,
    io_timeout: Duration,
    append_guard: Arc<Mutex<()>>,
}

impl PropertyStore {
    /// Create a store over the given backend
    pub fn new(backend: impl PropertyBackend + 'static) -> Self {
        Self::from_arc(Arc::new(backend))
    }

    /// Create a store over a shared backend
    pub fn from_arc(backend: Arc<dyn PropertyBackend>) -> Self {
        Self {
            backend,
            io_timeout: DEFAULT_IO_TIMEOUT,
            append_guard: Arc::new(Mutex::new(())),
        }
    }

    /// Set the deadline applied to each backend call
    pub fn with_io_timeout(mut self, io_timeout: Duration) -> Self {
        self.io_timeout = io_timeout;
        self
    }

    pub fn io_timeout(&self) -> Duration {
        self.io_timeout
    }

    /// Return every persisted record in storage order
    ///
    /// Fails open: any read failure, including an expired deadline, is
    /// logged and reported as an empty collection.
    pub async fn load_all(&self) -> Vec<Property> {
        match self.read().await {
            Ok(properties) => properties,
            Err(e) => {
                tracing::warn!(
                    backend = %self.backend.describe(),
                    error = %e,
                    "Property collection unreadable, serving empty listing"
                );
                Vec::new()
            }
        }
    }

    /// Return the records matching `spec`, in storage order
    pub async fn query(&self, spec: &FilterSpec) -> Vec<Property> {
        let matched = filter_properties(spec, self.load_all().await);
        tracing::debug!(filter = ?spec, matched = matched.len(), "Property query");
        matched
    }

    /// Assign the next id to `input`, persist the full collection and
    /// return the created record
    ///
    /// Unlike [`load_all`](Self::load_all) the read here does not fail
    /// open: persisting over a collection that could not be read would drop
    /// every existing record and hand out ids again.
    ///
    /// # Errors
    /// - [`StorageError::ReadFailed`] when the existing collection cannot be read
    /// - [`StorageError::WriteFailed`] when the collection cannot be persisted
    /// - [`StorageError::Timeout`] when either call exceeds the I/O deadline
    pub async fn append(&self, input: PropertyInput) -> ListingResult<Property> {
        let guard = Arc::clone(&self.append_guard).lock_owned().await;

        let mut properties = self.read().await.inspect_err(|e| {
            tracing::warn!(
                backend = %self.backend.describe(),
                error = %e,
                "Property collection unreadable, refusing to append"
            );
        })?;
        let property = input.into_property(next_id(&properties));
        properties.push(property.clone());
        let total = properties.len();

        self.write(properties, guard).await?;

        tracing::info!(
            id = property.id,
            title = %property.title,
            city = %property.city,
            total,
            "Property listed"
        );

        Ok(property)
    }

    async fn read(&self) -> Result<Vec<Property>, StorageError> {
        tokio::time::timeout(self.io_timeout, self.backend.read_all())
            .await
            .map_err(|_| StorageError::Timeout {
                operation: StorageOperation::Read,
                after: self.io_timeout,
            })?
    }

    /// Persist `properties` from a task that releases `guard` only once the
    /// backend call has returned, whether or not the caller is still waiting.
    async fn write(
        &self,
        properties: Vec<Property>,
        guard: OwnedMutexGuard<()>,
    ) -> Result<(), StorageError> {
        let backend = Arc::clone(&self.backend);
        let task = tokio::spawn(async move {
            let result = backend.write_all(&properties).await;
            drop(guard);
            result
        });

        match tokio::time::timeout(self.io_timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(StorageError::WriteFailed {
                resource: self.backend.describe(),
                message: join_error.to_string(),
            }),
            Err(_) => {
                tracing::warn!(
                    backend = %self.backend.describe(),
                    after_ms = self.io_timeout.as_millis() as u64,
                    "Write still in flight after deadline, next append waits for it"
                );
                Err(StorageError::Timeout {
                    operation: StorageOperation::Write,
                    after: self.io_timeout,
                })
            }
        }
    }
}

/// Next identifier for a collection: one past the largest id, or 1 when empty
pub fn next_id(properties: &[Property]) -> PropertyId {
    properties.iter().map(|p| p.id).max().unwrap_or(0) + 1
}
