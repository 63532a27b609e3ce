//! HTTP handlers for the listing endpoints

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::core::{
    Enquiry, EnquirySink, FilterSpec, ListingResult, Property, PropertyInput, PropertyQuery,
    PropertyStore,
};
use crate::server::extract::{ListingJson, ValidatedJson};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PropertyStore>,
    pub enquiries: Arc<dyn EnquirySink>,
}

/// Response for a successful listing submission
#[derive(Debug, Serialize)]
pub struct PropertyCreated {
    pub success: bool,
    pub message: String,
    pub property: Property,
}

/// Plain acknowledgement
#[derive(Debug, Serialize)]
pub struct Ack {
    pub success: bool,
    pub message: String,
}

/// List properties matching the query
///
/// GET /properties?type=Flat&saleMode=Resale&usage=Residential&city=mum
///
/// Always answers 200: the query is read as raw pairs so a repeated or
/// unexpected parameter never turns into a rejection.
pub async fn list_properties(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<Property>> {
    let spec = FilterSpec::from(pairs.into_iter().collect::<PropertyQuery>());
    Json(state.store.query(&spec).await)
}

/// List a new property
///
/// POST /properties
pub async fn create_property(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<PropertyInput>,
) -> ListingResult<Json<PropertyCreated>> {
    let property = state.store.append(input).await.inspect_err(|e| {
        tracing::error!(error = %e, "Failed to save property");
    })?;

    Ok(Json(PropertyCreated {
        success: true,
        message: "Property listed successfully".to_string(),
        property,
    }))
}

/// Accept an enquiry about a listing
///
/// POST /enquiry
pub async fn submit_enquiry(
    State(state): State<AppState>,
    ListingJson(body): ListingJson<Value>,
) -> Json<Ack> {
    let enquiry = Enquiry::new(body);
    let id = enquiry.id;

    // The client is acknowledged even when the sink fails
    if let Err(e) = state.enquiries.deliver(enquiry).await {
        tracing::warn!(enquiry_id = %id, error = %e, "Enquiry sink rejected enquiry");
    }

    Json(Ack {
        success: true,
        message: "Enquiry received".to_string(),
    })
}
