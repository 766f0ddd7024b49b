// ABOUTME: Budget-aware encouragement messages and time-of-day meal suggestions
// ABOUTME: Ordered threshold checks over the remaining calorie and protein budget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Local, Timelike};
use mealpilot_core::models::MealCategory;

/// Calorie goal reached or exceeded
pub const MESSAGE_GOAL_REACHED: &str =
    "You've hit your calorie goal for today. Great work staying on track!";

/// Less than a small snack's worth of calories left
pub const MESSAGE_ALMOST_THERE: &str =
    "You're almost there! A light snack will round out your day.";

/// Protein target lagging while calories remain
pub const MESSAGE_NEED_PROTEIN: &str =
    "You still need more protein today. Prioritize a protein-rich meal.";

/// Large calorie budget left
pub const MESSAGE_PLENTY_OF_ROOM: &str =
    "You have plenty of room left today. Enjoy a satisfying, balanced meal.";

/// Anything else
pub const MESSAGE_ON_TRACK: &str =
    "You're on track. A balanced meal will keep you moving toward your goals.";

const ALMOST_THERE_CALORIES: f64 = 200.0;
const PROTEIN_GAP_GRAMS: f64 = 30.0;
const PROTEIN_GAP_MIN_CALORIES: f64 = 300.0;
const PLENTY_OF_ROOM_CALORIES: f64 = 800.0;

const BREAKFAST_BEFORE_HOUR: u32 = 10;
const LUNCH_BEFORE_HOUR: u32 = 14;
const SNACKS_BEFORE_HOUR: u32 = 18;

/// Pick an encouragement message for the remaining budget.
///
/// Checks run in order and the first match wins.
#[must_use]
pub fn coach_message(remaining_calories: f64, remaining_protein: f64) -> &'static str {
    if remaining_calories <= 0.0 {
        MESSAGE_GOAL_REACHED
    } else if remaining_calories < ALMOST_THERE_CALORIES {
        MESSAGE_ALMOST_THERE
    } else if remaining_protein > PROTEIN_GAP_GRAMS && remaining_calories > PROTEIN_GAP_MIN_CALORIES
    {
        MESSAGE_NEED_PROTEIN
    } else if remaining_calories > PLENTY_OF_ROOM_CALORIES {
        MESSAGE_PLENTY_OF_ROOM
    } else {
        MESSAGE_ON_TRACK
    }
}

/// Meal category that fits the given hour of day (0-23)
#[must_use]
pub const fn suggested_meal_category(hour: u32) -> MealCategory {
    if hour < BREAKFAST_BEFORE_HOUR {
        MealCategory::Breakfast
    } else if hour < LUNCH_BEFORE_HOUR {
        MealCategory::Lunch
    } else if hour < SNACKS_BEFORE_HOUR {
        MealCategory::Snacks
    } else {
        MealCategory::Dinner
    }
}

/// Meal category for the current local hour
#[must_use]
pub fn suggested_meal_category_now() -> MealCategory {
    suggested_meal_category(Local::now().hour())
}
