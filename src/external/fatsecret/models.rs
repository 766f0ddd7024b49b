// ABOUTME: Vendor response schema for the FatSecret token and foods.search endpoints
// ABOUTME: Single-object-or-list and string-or-number fields are resolved at deserialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// OAuth token endpoint response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// Bearer token value
    pub access_token: String,
    /// Declared lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// Top-level `foods.search` response
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Results envelope; absent when the vendor reports an error instead
    #[serde(default)]
    pub foods: Option<FoodsEnvelope>,
    /// Vendor error reported with a 200 status
    #[serde(default)]
    pub error: Option<VendorError>,
}

/// Error object the vendor embeds in otherwise successful responses
#[derive(Debug, Deserialize)]
pub struct VendorError {
    /// Vendor error code
    #[serde(default)]
    pub code: Option<VendorDecimal>,
    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,
}

/// Search results with the vendor's total match count
#[derive(Debug, Default, Deserialize)]
pub struct FoodsEnvelope {
    /// Matching foods; the vendor sends a bare object when there is one match
    /// and omits the field when there are none. Records that do not match the
    /// food schema are skipped.
    #[serde(default, deserialize_with = "lenient_foods")]
    pub food: Vec<ExternalFood>,
    /// Total matches across all pages
    #[serde(default)]
    pub total_results: Option<VendorDecimal>,
}

impl FoodsEnvelope {
    /// Vendor-reported total, zero when missing or unparseable
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.total_results
            .as_ref()
            .and_then(VendorDecimal::value)
            .filter(|v| *v >= 0.0)
            .map_or(0, |v| v as u64)
    }
}

/// A vendor food record
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalFood {
    /// Vendor identifier
    #[serde(deserialize_with = "string_or_number")]
    pub food_id: String,
    /// Food name
    pub food_name: String,
    /// Brand, for branded foods
    #[serde(default)]
    pub brand_name: Option<String>,
    /// `Generic` or `Brand`
    #[serde(default)]
    pub food_type: Option<String>,
    /// Serving records
    #[serde(default)]
    pub servings: Option<Servings>,
}

impl ExternalFood {
    /// The first serving the vendor listed
    #[must_use]
    pub fn first_serving(&self) -> Option<&ExternalServing> {
        self.servings.as_ref().and_then(|s| s.serving.first())
    }
}

/// Serving list wrapper
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Servings {
    /// One or more servings
    #[serde(default, deserialize_with = "one_or_many")]
    pub serving: Vec<ExternalServing>,
}

/// A vendor serving record with decimal-string nutrient quantities
#[derive(Debug, Clone, Default, Deserialize)]
#[allow(missing_docs)]
pub struct ExternalServing {
    #[serde(default)]
    pub serving_description: Option<String>,
    #[serde(default)]
    pub metric_serving_amount: Option<VendorDecimal>,
    #[serde(default)]
    pub metric_serving_unit: Option<String>,
    #[serde(default)]
    pub calories: Option<VendorDecimal>,
    #[serde(default)]
    pub protein: Option<VendorDecimal>,
    #[serde(default)]
    pub carbohydrate: Option<VendorDecimal>,
    #[serde(default)]
    pub fat: Option<VendorDecimal>,
    #[serde(default)]
    pub fiber: Option<VendorDecimal>,
    #[serde(default)]
    pub sugar: Option<VendorDecimal>,
    #[serde(default)]
    pub sodium: Option<VendorDecimal>,
    #[serde(default)]
    pub saturated_fat: Option<VendorDecimal>,
    #[serde(default)]
    pub trans_fat: Option<VendorDecimal>,
    #[serde(default)]
    pub cholesterol: Option<VendorDecimal>,
    #[serde(default)]
    pub calcium: Option<VendorDecimal>,
    #[serde(default)]
    pub iron: Option<VendorDecimal>,
    #[serde(default)]
    pub potassium: Option<VendorDecimal>,
    #[serde(default)]
    pub vitamin_a: Option<VendorDecimal>,
    #[serde(default)]
    pub vitamin_c: Option<VendorDecimal>,
    #[serde(default)]
    pub vitamin_d: Option<VendorDecimal>,
}

/// A quantity the vendor sends either as a JSON number or a decimal string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VendorDecimal {
    /// JSON number
    Number(f64),
    /// Decimal string such as `"12.50"`
    Text(String),
}

impl VendorDecimal {
    /// Parsed finite value, `None` for blank or non-numeric text
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n).filter(|v| v.is_finite()),
            Self::Text(text) => parse_decimal(text),
        }
    }
}

/// Parse a vendor decimal string, rejecting blanks, NaN, and infinities
#[must_use]
pub fn parse_decimal(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<OneOrMany<T>>::deserialize(deserializer)?.map_or_else(Vec::new, Vec::from))
}

fn lenient_foods<'de, D>(deserializer: D) -> Result<Vec<ExternalFood>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Value> = one_or_many(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<ExternalFood>(item) {
            Ok(food) => Some(food),
            Err(e) => {
                debug!(error = %e, "Skipping malformed food record");
                None
            }
        })
        .collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Integer(u64),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Text(text) => text,
        StringOrNumber::Integer(n) => n.to_string(),
    })
}
