// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for food search normalization, caching, and meal scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain: the search cache, the vendor API, macro
//! clamp ranges used during normalization, and the meal recommendation weights.

/// Search result cache constants (TTL, capacity)
pub mod cache;
/// Food database vendor constants (endpoints, limits, token lifetime)
pub mod food_database;
/// Physiological clamp ranges for normalized macro values
pub mod nutrition_limits;
/// Meal recommendation filter and scoring constants
pub mod recommendation;
