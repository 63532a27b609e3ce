//! Property records and their enumerated attributes

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

/// Identifier assigned to a property by the store
pub type PropertyId = u64;

/// Kind of real estate being listed
///
/// Serialized as the bare variant name (`"Flat"`, `"Villa"`, ...), which is
/// also the exact value a `type` filter is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKind {
    Land,
    Plot,
    Flat,
    Villa,
    Office,
    Shop,
    Warehouse,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 7] = [
        PropertyKind::Land,
        PropertyKind::Plot,
        PropertyKind::Flat,
        PropertyKind::Villa,
        PropertyKind::Office,
        PropertyKind::Shop,
        PropertyKind::Warehouse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::Land => "Land",
            PropertyKind::Plot => "Plot",
            PropertyKind::Flat => "Flat",
            PropertyKind::Villa => "Villa",
            PropertyKind::Office => "Office",
            PropertyKind::Shop => "Shop",
            PropertyKind::Warehouse => "Warehouse",
        }
    }
}

/// Whether the property is a first sale or a resale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaleMode {
    Fresh,
    Resale,
}

impl SaleMode {
    pub const ALL: [SaleMode; 2] = [SaleMode::Fresh, SaleMode::Resale];

    pub fn as_str(&self) -> &'static str {
        match self {
            SaleMode::Fresh => "Fresh",
            SaleMode::Resale => "Resale",
        }
    }
}

/// Intended usage of the property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Usage {
    Residential,
    Commercial,
}

impl Usage {
    pub const ALL: [Usage; 2] = [Usage::Residential, Usage::Commercial];

    pub fn as_str(&self) -> &'static str {
        match self {
            Usage::Residential => "Residential",
            Usage::Commercial => "Commercial",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted real-estate listing
///
/// Field names on the wire are camelCase (`saleMode`) and the kind is
/// serialized under `type`, matching the layout of the backing JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    pub sale_mode: SaleMode,
    pub usage: Usage,
    pub price: f64,
    pub area: f64,
    pub city: String,
    pub locality: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// A property submission: every attribute of [`Property`] except `id`
///
/// An `id` present in the request body is ignored; the store assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInput {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    pub sale_mode: SaleMode,
    pub usage: Usage,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0.0))]
    pub area: f64,
    pub city: String,
    pub locality: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl PropertyInput {
    /// Attach an identifier, producing the full record
    pub fn into_property(self, id: PropertyId) -> Property {
        Property {
            id,
            title: self.title,
            kind: self.kind,
            sale_mode: self.sale_mode,
            usage: self.usage,
            price: self.price,
            area: self.area,
            city: self.city,
            locality: self.locality,
            lat: self.lat,
            lng: self.lng,
            images: self.images,
            description: self.description,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be empty".into());
        return Err(err);
    }
    Ok(())
}
