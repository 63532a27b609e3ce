//! Enquiries about a listing
//!
//! Enquiries are not persisted. They are handed to an [`EnquirySink`];
//! the default sink only logs them.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// An enquiry as received from a client
///
/// The body is free-form JSON (typically name, email, phone, message and
/// the title of the property it concerns).
#[derive(Debug, Clone, Serialize)]
pub struct Enquiry {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub body: Value,
}

impl Enquiry {
    pub fn new(body: Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            body,
        }
    }

    /// Title of the property the enquiry refers to, when the client sent one
    pub fn property_title(&self) -> Option<&str> {
        self.body.get("property").and_then(Value::as_str)
    }
}

/// Destination for received enquiries
#[async_trait]
pub trait EnquirySink: Send + Sync {
    async fn deliver(&self, enquiry: Enquiry) -> Result<()>;
}

/// Sink that writes each enquiry to the log and drops it
#[derive(Debug, Clone, Default)]
pub struct LogEnquirySink;

#[async_trait]
impl EnquirySink for LogEnquirySink {
    async fn deliver(&self, enquiry: Enquiry) -> Result<()> {
        tracing::info!(
            enquiry_id = %enquiry.id,
            received_at = %enquiry.received_at,
            property = enquiry.property_title().unwrap_or("-"),
            body = %enquiry.body,
            "Received enquiry"
        );
        Ok(())
    }
}
