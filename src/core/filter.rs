//! Filter evaluation over the property collection
//!
//! A [`FilterSpec`] is a conjunction of optional predicates. Absent fields
//! are wildcards, so the empty spec keeps every record. Evaluation is pure:
//! it never reorders, deduplicates or mutates the input.

use crate::core::property::Property;
use serde::{Deserialize, Serialize};

/// Optional predicates narrowing a property listing
///
/// `min_price` / `max_price` are carried so callers can round-trip the
/// filter shape, but they are never consulted by [`FilterSpec::matches`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Exact, case-sensitive match against the property kind (`"Flat"`, ...)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Exact match against the sale mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_mode: Option<String>,

    /// Exact match against the usage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// Case-insensitive substring of the city
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_substring: Option<String>,

    /// Reserved, inactive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,

    /// Reserved, inactive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_sale_mode(mut self, sale_mode: impl Into<String>) -> Self {
        self.sale_mode = Some(sale_mode.into());
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city_substring = Some(city.into());
        self
    }

    /// True when no active predicate is set
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.sale_mode.is_none()
            && self.usage.is_none()
            && self.city_substring.is_none()
    }

    /// Check a single record against every active predicate
    pub fn matches(&self, property: &Property) -> bool {
        self.kind
            .as_deref()
            .is_none_or(|kind| property.kind.as_str() == kind)
            && self
                .sale_mode
                .as_deref()
                .is_none_or(|mode| property.sale_mode.as_str() == mode)
            && self
                .usage
                .as_deref()
                .is_none_or(|usage| property.usage.as_str() == usage)
            && self
                .city_substring
                .as_deref()
                .is_none_or(|needle| contains_ignore_case(&property.city, needle))
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Narrow `properties` to the records matching `spec`, keeping input order
pub fn filter_properties(spec: &FilterSpec, properties: Vec<Property>) -> Vec<Property> {
    if spec.is_empty() {
        return properties;
    }
    properties.into_iter().filter(|p| spec.matches(p)).collect()
}

/// Query-string shape of a listing request
///
/// # Example
/// ```text
/// GET /properties?type=Flat&usage=Residential&city=mum
/// ```
///
/// Empty parameters (`?type=`) are treated as absent. A repeated parameter
/// keeps its first value, and unknown parameters are ignored.
#[derive(Debug, Clone, Default)]
pub struct PropertyQuery {
    pub kind: Option<String>,
    pub sale_mode: Option<String>,
    pub usage: Option<String>,
    pub city: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl FromIterator<(String, String)> for PropertyQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = PropertyQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "type" => &mut query.kind,
                "saleMode" => &mut query.sale_mode,
                "usage" => &mut query.usage,
                "city" => &mut query.city,
                "minPrice" => &mut query.min_price,
                "maxPrice" => &mut query.max_price,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

impl From<PropertyQuery> for FilterSpec {
    fn from(query: PropertyQuery) -> Self {
        Self {
            kind: non_empty(query.kind),
            sale_mode: non_empty(query.sale_mode),
            usage: non_empty(query.usage),
            city_substring: non_empty(query.city),
            min_price: non_empty(query.min_price).and_then(|s| s.parse().ok()),
            max_price: non_empty(query.max_price).and_then(|s| s.parse().ok()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
