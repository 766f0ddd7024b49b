// ABOUTME: Converts vendor food records into the unified product schema
// ABOUTME: Rounds and clamps macros, drops all-zero records, and collects micronutrients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::models::{ExternalFood, ExternalServing, SearchResponse, VendorDecimal};
use mealpilot_core::constants::food_database::{
    DEFAULT_SERVING_SIZE, DEFAULT_SERVING_UNIT, PRODUCT_ID_PREFIX, SOURCE_NAME,
};
use mealpilot_core::constants::nutrition_limits::{
    MAX_CALORIES, MAX_CARBS_G, MAX_FAT_G, MAX_PROTEIN_G, MICRONUTRIENT_DECIMALS,
};
use mealpilot_core::errors::FoodSearchError;
use mealpilot_core::models::{Micronutrients, UnifiedProduct, UnifiedSearchResult};
use tracing::debug;

/// Parse a `foods.search` body and normalize every food it contains
///
/// Foods that normalize to nothing are dropped; `total_count` is the vendor's
/// figure and may exceed the number of returned products.
///
/// # Errors
///
/// Returns `FoodSearchError::InvalidResponse` if the body is not JSON of the
/// expected shape or carries a vendor error object
pub fn parse_search_response(body: &str) -> Result<UnifiedSearchResult, FoodSearchError> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| FoodSearchError::InvalidResponse(format!("search response: {e}")))?;

    if let Some(error) = response.error {
        let code = error
            .code
            .as_ref()
            .and_then(VendorDecimal::value)
            .map_or_else(|| "unknown".to_owned(), |c| c.to_string());
        return Err(FoodSearchError::InvalidResponse(format!(
            "vendor error {code}: {}",
            error.message.unwrap_or_default()
        )));
    }

    let Some(foods) = response.foods else {
        return Ok(UnifiedSearchResult::empty());
    };
    let total_count = foods.total_count();
    let vendor_count = foods.food.len();
    let products: Vec<UnifiedProduct> = foods.food.iter().filter_map(normalize_food).collect();

    if products.len() < vendor_count {
        debug!(
            dropped = vendor_count - products.len(),
            "Dropped foods without usable macro data"
        );
    }

    Ok(UnifiedSearchResult {
        products,
        total_count,
    })
}

/// Normalize one vendor food, using its first serving
///
/// Returns `None` when calories, protein, carbs, and fat all round to zero.
#[must_use]
pub fn normalize_food(food: &ExternalFood) -> Option<UnifiedProduct> {
    let default_serving = ExternalServing::default();
    let serving = food.first_serving().unwrap_or(&default_serving);

    let calories = rounded_macro(serving.calories.as_ref(), MAX_CALORIES);
    let protein = rounded_macro(serving.protein.as_ref(), MAX_PROTEIN_G);
    let carbs = rounded_macro(serving.carbohydrate.as_ref(), MAX_CARBS_G);
    let fat = rounded_macro(serving.fat.as_ref(), MAX_FAT_G);
    if calories == 0 && protein == 0 && carbs == 0 && fat == 0 {
        return None;
    }

    let serving_size = decimal(serving.metric_serving_amount.as_ref()).unwrap_or(DEFAULT_SERVING_SIZE);
    let serving_unit = serving
        .metric_serving_unit
        .as_deref()
        .map(str::trim)
        .filter(|unit| !unit.is_empty())
        .unwrap_or(DEFAULT_SERVING_UNIT)
        .to_lowercase();
    let serving_description = serving
        .serving_description
        .as_deref()
        .map(str::trim)
        .filter(|description| !description.is_empty())
        .map_or_else(|| format!("{serving_size}{serving_unit}"), ToOwned::to_owned);

    let brand = food
        .brand_name
        .as_deref()
        .map(str::trim)
        .filter(|brand| !brand.is_empty())
        .map(ToOwned::to_owned);
    let name = brand.as_ref().map_or_else(
        || food.food_name.clone(),
        |brand| format!("{} ({brand})", food.food_name),
    );

    Some(UnifiedProduct {
        id: format!("{PRODUCT_ID_PREFIX}{}", food.food_id),
        name,
        brand,
        image_url: None,
        calories,
        protein,
        carbs,
        fat,
        serving_description,
        serving_size,
        serving_unit,
        micronutrients: micronutrients(serving),
        source: SOURCE_NAME.to_owned(),
    })
}

fn decimal(value: Option<&VendorDecimal>) -> Option<f64> {
    value.and_then(VendorDecimal::value)
}

/// Missing or unparseable values count as zero; the result lies in `[0, max]`
fn rounded_macro(value: Option<&VendorDecimal>, max: i64) -> i64 {
    decimal(value).unwrap_or(0.0).round().clamp(0.0, max as f64) as i64
}

fn round_micronutrient(value: Option<&VendorDecimal>) -> Option<f64> {
    let factor = 10_f64.powi(MICRONUTRIENT_DECIMALS);
    decimal(value).map(|v| (v * factor).round() / factor)
}

fn micronutrients(serving: &ExternalServing) -> Option<Micronutrients> {
    let micros = Micronutrients {
        fiber: round_micronutrient(serving.fiber.as_ref()),
        sugar: round_micronutrient(serving.sugar.as_ref()),
        sodium: round_micronutrient(serving.sodium.as_ref()),
        saturated_fat: round_micronutrient(serving.saturated_fat.as_ref()),
        trans_fat: round_micronutrient(serving.trans_fat.as_ref()),
        cholesterol: round_micronutrient(serving.cholesterol.as_ref()),
        calcium: round_micronutrient(serving.calcium.as_ref()),
        iron: round_micronutrient(serving.iron.as_ref()),
        potassium: round_micronutrient(serving.potassium.as_ref()),
        vitamin_a: round_micronutrient(serving.vitamin_a.as_ref()),
        vitamin_c: round_micronutrient(serving.vitamin_c.as_ref()),
        vitamin_d: round_micronutrient(serving.vitamin_d.as_ref()),
    };
    (!micros.is_empty()).then_some(micros)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Option<VendorDecimal> {
        Some(VendorDecimal::Text(value.to_owned()))
    }

    #[test]
    fn test_rounded_macro_clamps_and_defaults() {
        assert_eq!(rounded_macro(text("12.5").as_ref(), MAX_PROTEIN_G), 13);
        assert_eq!(rounded_macro(text("-4").as_ref(), MAX_PROTEIN_G), 0);
        assert_eq!(rounded_macro(text("9999").as_ref(), MAX_CALORIES), MAX_CALORIES);
        assert_eq!(rounded_macro(text("abc").as_ref(), MAX_FAT_G), 0);
        assert_eq!(rounded_macro(None, MAX_CARBS_G), 0);
    }

    #[test]
    fn test_micronutrients_round_to_two_decimals() {
        let serving = ExternalServing {
            sodium: text("0.12345"),
            iron: Some(VendorDecimal::Number(1.006)),
            calcium: text(""),
            ..ExternalServing::default()
        };
        let micros = micronutrients(&serving);
        assert_eq!(micros.as_ref().and_then(|m| m.sodium), Some(0.12));
        assert_eq!(micros.as_ref().and_then(|m| m.iron), Some(1.01));
        assert_eq!(micros.as_ref().and_then(|m| m.calcium), None);
    }

    #[test]
    fn test_micronutrients_omitted_when_nothing_parses() {
        let serving = ExternalServing {
            fiber: text("n/a"),
            ..ExternalServing::default()
        };
        assert!(micronutrients(&serving).is_none());
    }
}
