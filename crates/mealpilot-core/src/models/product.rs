// ABOUTME: Unified product schema for normalized food database results
// ABOUTME: UnifiedProduct, UnifiedSearchResult, and the optional Micronutrients block
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Micronutrient amounts per serving, rounded to two decimals.
///
/// Only fields the vendor supplied as parseable numbers are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Micronutrients {
    /// Dietary fiber (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    /// Sugar (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
    /// Sodium (mg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
    /// Saturated fat (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturated_fat: Option<f64>,
    /// Trans fat (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trans_fat: Option<f64>,
    /// Cholesterol (mg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cholesterol: Option<f64>,
    /// Calcium
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calcium: Option<f64>,
    /// Iron
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iron: Option<f64>,
    /// Potassium (mg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potassium: Option<f64>,
    /// Vitamin A
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitamin_a: Option<f64>,
    /// Vitamin C
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitamin_c: Option<f64>,
    /// Vitamin D
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitamin_d: Option<f64>,
}

impl Micronutrients {
    /// True when no micronutrient was supplied
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fiber.is_none()
            && self.sugar.is_none()
            && self.sodium.is_none()
            && self.saturated_fat.is_none()
            && self.trans_fat.is_none()
            && self.cholesterol.is_none()
            && self.calcium.is_none()
            && self.iron.is_none()
            && self.potassium.is_none()
            && self.vitamin_a.is_none()
            && self.vitamin_c.is_none()
            && self.vitamin_d.is_none()
    }
}

/// A food product normalized from an external database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedProduct {
    /// Source-prefixed identifier (e.g. `fatsecret-33691`)
    pub id: String,
    /// Display name, with the brand in parentheses when present
    pub name: String,
    /// Brand name (for branded foods)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Product image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Calories per serving, rounded and clamped to `[0, 5000]`
    pub calories: i64,
    /// Protein grams per serving, rounded and clamped to `[0, 500]`
    pub protein: i64,
    /// Carbohydrate grams per serving, rounded and clamped to `[0, 1000]`
    pub carbs: i64,
    /// Fat grams per serving, rounded and clamped to `[0, 500]`
    pub fat: i64,
    /// Human-readable serving description (e.g. "1 cup")
    pub serving_description: String,
    /// Metric serving amount
    pub serving_size: f64,
    /// Metric serving unit, lower-cased
    pub serving_unit: String,
    /// Micronutrients, omitted when the vendor supplied none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub micronutrients: Option<Micronutrients>,
    /// Product source tag
    pub source: String,
}

/// Normalized search results.
///
/// `total_count` is the vendor's match count and may exceed `products.len()`:
/// the vendor pages results, and records without usable macros are dropped
/// during normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnifiedSearchResult {
    /// Normalized products in vendor order
    pub products: Vec<UnifiedProduct>,
    /// Total matches reported by the vendor
    pub total_count: u64,
}

impl UnifiedSearchResult {
    /// Result with no products and a zero count
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            products: Vec::new(),
            total_count: 0,
        }
    }

    /// True when no products were returned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
