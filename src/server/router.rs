//! Router builder utilities for listing routes

use crate::server::handlers::{AppState, create_property, list_properties, submit_enquiry};
use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};

/// Build the listing routes
///
/// - GET /properties - List properties, filtered by query parameters
/// - POST /properties - List a new property
/// - POST /enquiry - Submit an enquiry
pub fn build_property_routes(state: AppState) -> Router {
    Router::new()
        .route("/properties", get(list_properties).post(create_property))
        .route("/enquiry", post(submit_enquiry))
        .with_state(state)
}

/// Build health check routes
pub fn build_health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "propmap"
    }))
}
