// ABOUTME: Recommendation, coaching, and meal-category commands
// ABOUTME: Pure computations over the bundled or a user-supplied meal dataset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use chrono::Utc;
use mealpilot::intelligence::{
    bundled_meals, coach_message, load_meals, meal_to_food, recommend_meals,
    suggested_meal_category, suggested_meal_category_now,
};
use mealpilot::models::{MealCategory, MealDatabaseEntry};
use serde_json::json;
use std::fs;
use std::path::Path;

pub fn run(
    calories: f64,
    protein: f64,
    category: Option<MealCategory>,
    meals_path: Option<&Path>,
) -> Result<String> {
    let custom: Option<Vec<MealDatabaseEntry>> = meals_path
        .map(|path| {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading meal dataset {}", path.display()))?;
            load_meals(&raw).with_context(|| format!("parsing meal dataset {}", path.display()))
        })
        .transpose()?;
    let meals = custom.as_deref().unwrap_or_else(|| bundled_meals());

    let result = recommend_meals(meals, calories, protein, category);
    let now = Utc::now();
    let loggable: Vec<_> = [&result.protein_pick, &result.fill_pick, &result.quick_pick]
        .into_iter()
        .flatten()
        .map(|meal| meal_to_food(meal, now))
        .collect();

    serde_json::to_string_pretty(&json!({
        "recommendation": result,
        "coach_message": coach_message(calories, protein),
        "loggable_foods": loggable,
    }))
    .context("serializing recommendation")
}

pub fn coach(calories: f64, protein: f64) -> Result<String> {
    serde_json::to_string_pretty(&json!({
        "remaining_calories": calories,
        "remaining_protein": protein,
        "message": coach_message(calories, protein),
    }))
    .context("serializing coach message")
}

pub fn category(hour: Option<u32>) -> Result<String> {
    let category = hour.map_or_else(suggested_meal_category_now, suggested_meal_category);
    serde_json::to_string_pretty(&json!({ "hour": hour, "category": category }))
        .context("serializing meal category")
}
