// ABOUTME: Physiological clamp ranges applied to normalized macro values
// ABOUTME: Guards against vendor data entry errors such as 50000 kcal servings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Maximum calories per serving
pub const MAX_CALORIES: i64 = 5_000;

/// Maximum protein grams per serving
pub const MAX_PROTEIN_G: i64 = 500;

/// Maximum carbohydrate grams per serving
pub const MAX_CARBS_G: i64 = 1_000;

/// Maximum fat grams per serving
pub const MAX_FAT_G: i64 = 500;

/// Decimal places kept for micronutrient amounts
pub const MICRONUTRIENT_DECIMALS: i32 = 2;
