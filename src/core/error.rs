//! Typed error handling for the listing service
//!
//! # Error Categories
//!
//! - [`ListingError::MalformedInput`]: a request body that does not parse or
//!   fails validation. Rejected at the boundary with HTTP 400.
//! - [`StorageError`]: failures of the backing resource. Reads are absorbed
//!   by the store (fail-open); writes and deadlines are surfaced.
//!
//! Every error renders as `{ "success": false, "code": ..., "message": ... }`
//! so clients of the listing endpoints can branch on `success` alone.
//!
//! # Example
//!
//! ```rust,ignore
//! match store.append(input).await {
//!     Ok(property) => println!("listed #{}", property.id),
//!     Err(ListingError::Storage(StorageError::WriteFailed { resource, .. })) => {
//!         eprintln!("could not persist {}", resource);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// The main error type for the listing service
#[derive(Debug)]
pub enum ListingError {
    /// Request body failed to parse or is missing required fields
    MalformedInput {
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Storage backend errors
    Storage(StorageError),
}

impl ListingError {
    pub fn malformed(message: impl Into<String>) -> Self {
        ListingError::MalformedInput {
            message: message.into(),
            details: None,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ListingError::MalformedInput { .. } => StatusCode::BAD_REQUEST,
            ListingError::Storage(e) => e.status_code(),
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ListingError::MalformedInput { .. } => "MALFORMED_INPUT",
            ListingError::Storage(e) => e.error_code(),
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            // The listing form only checks `success`; detail goes aside.
            ListingError::MalformedInput { message, details } => ErrorResponse {
                success: false,
                code: self.error_code().to_string(),
                message: "Invalid request".to_string(),
                details: Some(match details {
                    Some(details) => serde_json::json!({ "reason": message, "fields": details }),
                    None => serde_json::json!({ "reason": message }),
                }),
            },
            ListingError::Storage(_) => ErrorResponse {
                success: false,
                code: self.error_code().to_string(),
                message: self.to_string(),
                details: None,
            },
        }
    }
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingError::MalformedInput { message, .. } => {
                write!(f, "Malformed input: {}", message)
            }
            ListingError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ListingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListingError::Storage(e) => Some(e),
            ListingError::MalformedInput { .. } => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ListingError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Which side of the backing resource an operation touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOperation {
    Read,
    Write,
}

impl fmt::Display for StorageOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageOperation::Read => f.write_str("read"),
            StorageOperation::Write => f.write_str("write"),
        }
    }
}

/// Errors related to the backing resource
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Resource exists but could not be read or decoded
    #[error("Failed to read {resource}: {message}")]
    ReadFailed { resource: String, message: String },

    /// Collection could not be persisted
    #[error("Failed to write {resource}: {message}")]
    WriteFailed { resource: String, message: String },

    /// Backend did not answer within the I/O deadline
    #[error("Storage {operation} timed out after {}ms", .after.as_millis())]
    Timeout {
        operation: StorageOperation,
        after: Duration,
    },
}

impl StorageError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            StorageError::ReadFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            StorageError::WriteFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            StorageError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::ReadFailed { .. } => "STORAGE_READ_FAILED",
            StorageError::WriteFailed { .. } => "STORAGE_WRITE_FAILED",
            StorageError::Timeout { .. } => "STORAGE_TIMEOUT",
        }
    }
}

impl From<StorageError> for ListingError {
    fn from(err: StorageError) -> Self {
        ListingError::Storage(err)
    }
}

// =============================================================================
// Conversions from external error types
// =============================================================================

impl From<serde_json::Error> for ListingError {
    fn from(err: serde_json::Error) -> Self {
        ListingError::malformed(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ListingError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields: serde_json::Map<String, serde_json::Value> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), serde_json::json!(messages))
            })
            .collect();

        ListingError::MalformedInput {
            message: "validation failed".to_string(),
            details: Some(serde_json::Value::Object(fields)),
        }
    }
}

/// Result type alias for listing operations
pub type ListingResult<T> = std::result::Result<T, ListingError>;
