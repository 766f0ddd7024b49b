// ABOUTME: Bundled static meal dataset embedded at compile time
// ABOUTME: Parsed once on first use; callers may also load their own JSON dataset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealpilot_core::errors::AppResult;
use mealpilot_core::models::MealDatabaseEntry;
use std::sync::OnceLock;
use tracing::error;

/// Raw JSON of the bundled dataset
const BUNDLED_MEALS_JSON: &str = include_str!("../data/meals.json");

/// Parsed bundled dataset, initialized on first access
static BUNDLED_MEALS: OnceLock<Vec<MealDatabaseEntry>> = OnceLock::new();

/// Parse a meal dataset from its JSON array representation
///
/// # Errors
///
/// Returns a serialization error if the JSON is not an array of meal records
pub fn load_meals(json: &str) -> AppResult<Vec<MealDatabaseEntry>> {
    Ok(serde_json::from_str(json)?)
}

/// The meal dataset shipped with the crate.
///
/// A malformed bundle is logged and treated as an empty dataset so the
/// recommendation engine keeps its no-failure contract.
pub fn bundled_meals() -> &'static [MealDatabaseEntry] {
    BUNDLED_MEALS.get_or_init(|| {
        load_meals(BUNDLED_MEALS_JSON).unwrap_or_else(|e| {
            error!(error = %e, "Bundled meal dataset failed to parse");
            Vec::new()
        })
    })
}
