// ABOUTME: Main library entry point for MealPilot nutrition services
// ABOUTME: Food database search client, configuration, logging, and recommendation re-exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `MealPilot`
//!
//! Two independent services for a nutrition-tracking application:
//!
//! - **Food search**: a FatSecret platform client that acquires an OAuth
//!   token, searches the vendor's food database, normalizes results into
//!   `UnifiedProduct` records, and caches them for five minutes.
//! - **Meal recommendations**: a pure scoring engine over a bundled meal
//!   dataset, re-exported from `mealpilot-intelligence`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mealpilot::external::FatSecretClient;
//! use mealpilot::intelligence::MealRecommender;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = FatSecretClient::from_env()?;
//!     let results = client.search_default("oatmeal").await?;
//!     println!("{} products", results.products.len());
//!
//!     let picks = MealRecommender::default().recommend(650.0, 35.0, None);
//!     println!("{:?}", picks.protein_pick.map(|m| m.name));
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the CLI binary (src/bin/) and integration tests (tests/).

/// Configuration loaded from environment variables
pub mod config;

/// Unified error handling re-exported from `mealpilot-core`
pub mod errors;

/// External food database clients
pub mod external;

/// Structured logging setup
pub mod logging;

/// Clock abstraction and shared HTTP client
pub mod utils;

/// Shared models (`UnifiedProduct`, `MealDatabaseEntry`, ...)
pub use mealpilot_core::models;

/// Domain constants (clamp limits, cache limits, recommendation weights)
pub use mealpilot_core::constants;

/// Meal recommendation engine and coaching helpers
pub use mealpilot_intelligence as intelligence;
