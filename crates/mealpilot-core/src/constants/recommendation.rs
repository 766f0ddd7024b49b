// ABOUTME: Meal recommendation filter windows and scoring weights
// ABOUTME: Calorie buffer, relaxation tiers, and per-criterion tag bonuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Calorie buffer above the remaining budget (window is `[budget - 3x, budget + 1x]`)
pub const CALORIE_BUFFER: f64 = 100.0;

/// Multiplier applied to the buffer for the lower edge of the primary window
pub const LOWER_WINDOW_BUFFERS: f64 = 3.0;

/// Fewer eligible meals than this triggers the next relaxation tier
pub const MIN_ELIGIBLE_MEALS: usize = 3;

/// Size of the last-resort tier (lowest-calorie meals of the whole dataset)
pub const FALLBACK_MEAL_COUNT: usize = 10;

/// Weight of the pre-assigned volume score in the fill score
pub const VOLUME_SCORE_WEIGHT: f64 = 10.0;

/// Fill bonus for meals tagged `filling`
pub const FILLING_TAG_BONUS: f64 = 20.0;

/// Fill bonus for meals tagged `fiber`
pub const FIBER_TAG_BONUS: f64 = 15.0;

/// Prep time (minutes) at which the quick score's time component reaches zero
pub const QUICK_PREP_BASELINE_MINUTES: f64 = 15.0;

/// Quick score points per minute under the baseline
pub const QUICK_PREP_MINUTE_WEIGHT: f64 = 5.0;

/// Quick bonus for meals tagged `quick`
pub const QUICK_TAG_BONUS: f64 = 30.0;

/// Quick bonus for meals tagged `portable`
pub const PORTABLE_TAG_BONUS: f64 = 10.0;

/// Tag names recognized by the scorers
pub mod tags {
    /// Meal keeps the user full for longer
    pub const FILLING: &str = "filling";
    /// Meal is high in fiber
    pub const FIBER: &str = "fiber";
    /// Meal is fast to prepare
    pub const QUICK: &str = "quick";
    /// Meal travels well
    pub const PORTABLE: &str = "portable";
}
