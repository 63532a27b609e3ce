//! Axum extractors for listing payloads
//!
//! Bodies are parsed from raw bytes, so a missing or wrong `Content-Type`
//! does not change the outcome: anything that is not the expected JSON is
//! rejected as [`ListingError::MalformedInput`] (HTTP 400,
//! `{"success": false, ...}`).

use crate::core::ListingError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body extractor with listing-style rejections
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn submit(ListingJson(body): ListingJson<serde_json::Value>) -> ... {
///     // body is any parseable JSON document
/// }
/// ```
pub struct ListingJson<T>(pub T);

impl<S, T> FromRequest<S> for ListingJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ListingError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ListingError::malformed(e.body_text()))?;

        let value = serde_json::from_slice(&bytes)?;
        Ok(ListingJson(value))
    }
}

/// JSON body extractor that also runs `validator` rules
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_property(
///     ValidatedJson(input): ValidatedJson<PropertyInput>,
/// ) -> ... {
///     // input parsed and validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = ListingError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let ListingJson(value) = ListingJson::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
