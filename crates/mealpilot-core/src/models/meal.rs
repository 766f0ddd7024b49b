// ABOUTME: Static meal database records used by the recommendation engine
// ABOUTME: MealCategory, MealDatabaseEntry, and the LoggableFood projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category a meal belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snacks,
}

impl MealCategory {
    /// All categories in the order of a day
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Snacks, Self::Dinner];

    /// Lower-case name used in the dataset and on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snacks => "snacks",
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" | "snacks" => Ok(Self::Snacks),
            other => Err(AppError::invalid_input(format!(
                "Unknown meal category '{other}' (expected breakfast, lunch, dinner, or snacks)"
            ))),
        }
    }
}

/// A record from the static meal database. Never mutated after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealDatabaseEntry {
    /// Stable meal identifier
    pub id: String,
    /// Meal name
    pub name: String,
    /// Meal category
    pub category: MealCategory,
    /// Calories per serving
    pub calories: f64,
    /// Protein grams per serving
    pub protein: f64,
    /// Carbohydrate grams per serving
    pub carbs: f64,
    /// Fat grams per serving
    pub fat: f64,
    /// Preparation time in minutes
    pub prep_time: u32,
    /// Pre-assigned fill heuristic (higher keeps you fuller)
    pub volume_score: f64,
    /// Descriptive tags (`filling`, `fiber`, `quick`, `portable`, ...)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Serving amount
    pub serving_size: f64,
    /// Serving unit
    pub serving_unit: String,
    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MealDatabaseEntry {
    /// Whether the meal carries the given tag (case-insensitive)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// A recommended meal projected into the shape the food log accepts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggableFood {
    /// Unique per logging event: `{meal_id}-{timestamp_millis}`
    pub id: String,
    /// Meal identifier this entry was created from
    pub source_meal_id: String,
    /// Display name
    pub name: String,
    /// Calories per serving
    pub calories: f64,
    /// Protein grams per serving
    pub protein: f64,
    /// Carbohydrate grams per serving
    pub carbs: f64,
    /// Fat grams per serving
    pub fat: f64,
    /// Serving amount
    pub serving_size: f64,
    /// Serving unit
    pub serving_unit: String,
    /// Log category, always `recommended`
    pub category: String,
    /// Macros are per serving rather than per 100 units
    pub per_serving: bool,
    /// When the projection was created
    pub logged_at: DateTime<Utc>,
}
