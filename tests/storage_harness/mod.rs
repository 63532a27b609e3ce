//! Shared test harness for property backend testing
//!
//! Provides fixture builders for `Property` / `PropertyInput` and the
//! `store_contract_tests!` macro that runs the `PropertyStore` contract
//! against any `PropertyBackend`.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod store_contract_tests;

use propmap::core::{Property, PropertyId, PropertyInput, PropertyKind, SaleMode, Usage};
use propmap::storage::JsonFileBackend;
use serde_json::{Value, json};

/// A valid listing submission
pub fn sample_input(kind: PropertyKind, usage: Usage, city: &str) -> PropertyInput {
    PropertyInput {
        title: format!("{} in {}", kind, city),
        kind,
        sale_mode: SaleMode::Fresh,
        usage,
        price: 7_500_000.0,
        area: 1_100.0,
        city: city.to_string(),
        locality: "Main Road".to_string(),
        lat: 18.52,
        lng: 73.85,
        images: vec!["https://images.example.com/listing.jpg".to_string()],
        description: "Well connected, close to schools".to_string(),
    }
}

/// A stored record with an explicit id
pub fn sample_property(id: PropertyId, kind: PropertyKind, usage: Usage, city: &str) -> Property {
    sample_input(kind, usage, city).into_property(id)
}

/// JSON body for `POST /properties`
pub fn sample_body() -> Value {
    json!({
        "title": "Corner shop near station",
        "type": "Shop",
        "saleMode": "Resale",
        "usage": "Commercial",
        "price": 4200000,
        "area": 320,
        "city": "Pune",
        "locality": "Shivajinagar",
        "lat": 18.53,
        "lng": 73.85,
        "images": [],
        "description": "Ground floor, high footfall"
    })
}

/// File backend over a fresh temporary directory that outlives the test
pub fn temp_json_backend() -> JsonFileBackend {
    let dir = tempfile::TempDir::new().unwrap().keep();
    JsonFileBackend::new(dir.join("properties.json"))
}
