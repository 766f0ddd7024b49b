// ABOUTME: Core data models shared by the food search client and meal engine
// ABOUTME: Re-exports the unified product schema and meal database records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Unified product schema produced by vendor normalization
pub mod product;

/// Static meal database records and the loggable food projection
pub mod meal;

pub use meal::{LoggableFood, MealCategory, MealDatabaseEntry};
pub use product::{Micronutrients, UnifiedProduct, UnifiedSearchResult};
