// ABOUTME: Tests for vendor food normalization into the unified product schema
// ABOUTME: Covers clamping, zero-macro drops, serving defaults, branding, and micronutrients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use mealpilot::constants::nutrition_limits::{MAX_CALORIES, MAX_CARBS_G, MAX_FAT_G, MAX_PROTEIN_G};
use mealpilot::external::fatsecret::models::ExternalFood;
use mealpilot::external::{normalize_food, parse_search_response};
use mealpilot::models::UnifiedProduct;
use serde_json::{json, Value};

fn external(value: Value) -> ExternalFood {
    serde_json::from_value(value).unwrap()
}

fn normalize(value: Value) -> Option<UnifiedProduct> {
    normalize_food(&external(value))
}

fn serving(fields: Value) -> Value {
    json!({ "food_id": "55", "food_name": "Test Food", "servings": { "serving": fields } })
}

#[test]
fn test_single_serving_object_matches_single_element_list() {
    let fields = json!({
        "serving_description": "1 medium",
        "metric_serving_amount": "118",
        "metric_serving_unit": "g",
        "calories": "105",
        "protein": "1.3",
        "carbohydrate": "27",
        "fat": "0.4",
        "potassium": "422"
    });

    let as_object = normalize(serving(fields.clone()));
    let as_list = normalize(serving(json!([fields])));
    assert!(as_object.is_some());
    assert_eq!(as_object, as_list);
}

#[test]
fn test_macros_are_rounded_and_clamped() {
    let product = normalize(serving(json!({
        "calories": "12000.4",
        "protein": "-3",
        "carbohydrate": "1500",
        "fat": "600.6"
    })))
    .unwrap();

    assert_eq!(product.calories, MAX_CALORIES);
    assert_eq!(product.protein, 0);
    assert_eq!(product.carbs, MAX_CARBS_G);
    assert_eq!(product.fat, MAX_FAT_G);
    assert!((0..=MAX_PROTEIN_G).contains(&product.protein));
}

#[test]
fn test_all_zero_macros_are_dropped() {
    assert!(normalize(serving(json!({
        "calories": "0.4",
        "protein": "0",
        "carbohydrate": "",
        "fat": "garbage"
    })))
    .is_none());
    assert!(normalize(json!({ "food_id": "1", "food_name": "No Servings" })).is_none());
}

#[test]
fn test_only_first_serving_is_used() {
    let product = normalize(serving(json!([
        { "calories": "50", "protein": "2", "carbohydrate": "8", "fat": "1" },
        { "calories": "500", "protein": "20", "carbohydrate": "80", "fat": "10" }
    ])))
    .unwrap();
    assert_eq!(product.calories, 50);
}

#[test]
fn test_serving_defaults_and_lowercase_unit() {
    let defaults = normalize(serving(json!({ "calories": "80" }))).unwrap();
    assert!((defaults.serving_size - 100.0).abs() < f64::EPSILON);
    assert_eq!(defaults.serving_unit, "g");
    assert_eq!(defaults.serving_description, "100g");

    let ml = normalize(serving(json!({
        "calories": "42",
        "metric_serving_amount": 250,
        "metric_serving_unit": "ML"
    })))
    .unwrap();
    assert!((ml.serving_size - 250.0).abs() < f64::EPSILON);
    assert_eq!(ml.serving_unit, "ml");
}

#[test]
fn test_brand_is_appended_to_name() {
    let branded = normalize(json!({
        "food_id": 9876,
        "food_name": "Protein Bar",
        "brand_name": "Acme",
        "food_type": "Brand",
        "servings": { "serving": { "calories": "210", "protein": "20" } }
    }))
    .unwrap();
    assert_eq!(branded.id, "fatsecret-9876");
    assert_eq!(branded.name, "Protein Bar (Acme)");
    assert_eq!(branded.brand.as_deref(), Some("Acme"));
    assert!(branded.image_url.is_none());

    let blank_brand = normalize(json!({
        "food_id": "1",
        "food_name": "Apple",
        "brand_name": "  ",
        "servings": { "serving": { "calories": "52" } }
    }))
    .unwrap();
    assert_eq!(blank_brand.name, "Apple");
    assert!(blank_brand.brand.is_none());
}

#[test]
fn test_micronutrients_parsed_or_omitted() {
    let with_micros = normalize(serving(json!({
        "calories": "100",
        "fiber": "3.456",
        "vitamin_c": "12",
        "sodium": "n/a"
    })))
    .unwrap();
    let micros = with_micros.micronutrients.unwrap();
    assert_eq!(micros.fiber, Some(3.46));
    assert_eq!(micros.vitamin_c, Some(12.0));
    assert_eq!(micros.sodium, None);

    let without = normalize(serving(json!({ "calories": "100", "iron": "" }))).unwrap();
    assert!(without.micronutrients.is_none());

    let serialized = serde_json::to_value(&without).unwrap();
    assert!(serialized.get("micronutrients").is_none());
}

#[test]
fn test_parse_search_response_preserves_vendor_total() {
    let body = json!({
        "foods": {
            "food": [
                { "food_id": "1", "food_name": "Water", "servings": { "serving": { "calories": "0" } } },
                { "food_id": "2", "food_name": "Egg", "servings": { "serving": { "calories": "72", "protein": "6.3" } } }
            ],
            "total_results": "318"
        }
    })
    .to_string();

    let result = parse_search_response(&body).unwrap();
    assert_eq!(result.products.len(), 1);
    assert_eq!(result.total_count, 318);
}

#[test]
fn test_parse_search_response_rejects_malformed_body() {
    assert!(parse_search_response("<html>").is_err());
    assert!(parse_search_response(r#"{"foods": {"food": 12}}"#).is_err());
    let empty = parse_search_response(r#"{"foods": {"total_results": "0"}}"#).unwrap();
    assert!(empty.is_empty());
}
