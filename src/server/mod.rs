//! Server module for the listing HTTP API
//!
//! This module provides a `ServerBuilder` that registers:
//! - Listing routes (`GET`/`POST /properties`, `POST /enquiry`)
//! - Health check routes

pub mod builder;
pub mod extract;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;
