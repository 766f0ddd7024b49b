// ABOUTME: Core types and constants for MealPilot nutrition services
// ABOUTME: Foundation crate with error handling, product and meal models, and limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `MealPilot` Core
//!
//! Foundation crate providing shared types and constants for the food search
//! client and the meal recommendation engine. Neither component depends on the
//! other; both depend on this crate.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `FoodSearchError`
//! - **constants**: Clamp ranges, cache limits, and recommendation weights
//! - **models**: Unified product schema and the static meal database records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`UnifiedProduct`, `MealDatabaseEntry`, `LoggableFood`)
pub mod models;
