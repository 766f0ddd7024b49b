// ABOUTME: Meal intelligence crate: recommendations, coaching messages, meal dataset
// ABOUTME: Deterministic and side-effect free so callers can use it from any context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `MealPilot` Intelligence
//!
//! Recommends meals from a static dataset given the user's remaining calorie
//! and protein budget. Three independent picks are produced per call:
//!
//! - **Protein**: most protein per calorie, plus absolute protein
//! - **Fill**: highest volume score, boosted by `filling` and `fiber` tags
//! - **Quick**: shortest prep time, boosted by `quick` and `portable` tags
//!
//! Nothing here performs I/O or returns errors; sparse inputs degrade to
//! fewer (or no) picks.

/// Encouragement messages and time-of-day meal suggestions
pub mod coaching;
/// Bundled static meal dataset
pub mod meal_database;
/// Eligibility filtering and per-criterion scoring
pub mod meal_recommendation;

pub use coaching::{coach_message, suggested_meal_category, suggested_meal_category_now};
pub use meal_database::{bundled_meals, load_meals};
pub use meal_recommendation::{
    meal_to_food, recommend_meals, EligibilityTier, MealRecommender, RecommendationResult,
    ScoredMeal,
};
