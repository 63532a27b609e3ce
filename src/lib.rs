//! # propmap
//!
//! Backend for a real-estate listing browser: a JSON-file backed property
//! store with filtered listing, listing submission and enquiries.
//!
//! ## Features
//!
//! - **Property Store**: whole-collection load, filtered query and append
//!   with `max(id) + 1` id assignment, over a pluggable storage backend
//! - **Fail-Open Reads**: a missing or corrupt data file lists as empty
//! - **Serialized Appends**: concurrent submissions never share an id
//! - **Filter Evaluator**: conjunctive type / sale mode / usage / city filters
//! - **Typed Errors**: malformed input, write failures and timeouts map to
//!   distinct HTTP responses
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use propmap::prelude::*;
//!
//! let store = PropertyStore::new(JsonFileBackend::new("data/properties.json"));
//!
//! ServerBuilder::new()
//!     .with_store(store)
//!     .serve("127.0.0.1:3000")
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Domain ===
    pub use crate::core::{
        Enquiry, EnquirySink, FilterSpec, LogEnquirySink, Property, PropertyBackend, PropertyId,
        PropertyInput, PropertyKind, PropertyQuery, PropertyStore, SaleMode, Usage,
        filter_properties, next_id,
    };

    // === Errors ===
    pub use crate::core::{ErrorResponse, ListingError, ListingResult, StorageError};

    // === Storage ===
    pub use crate::storage::{InMemoryBackend, JsonFileBackend};

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
