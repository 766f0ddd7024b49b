// ABOUTME: FatSecret platform API client: OAuth token, search, cache, and normalization
// ABOUTME: Converts the vendor's loosely-typed food schema into UnifiedProduct records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! FatSecret Platform API Client
//!
//! Searches the FatSecret food database and returns results in the unified
//! product schema shared with other product sources.
//!
//! # Features
//! - OAuth 2.0 client-credentials token, reused until 60 seconds before expiry
//! - Form-encoded `foods.search` requests with a per-call timeout
//! - 5-minute result cache bounded to 50 entries, evicting the oldest insert
//! - Soft-disabled mode: without credentials every search is empty
//!
//! # Example
//! ```rust,no_run
//! use mealpilot::config::FoodSearchConfig;
//! use mealpilot::external::FatSecretClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FoodSearchConfig::default().with_credentials("client-id", "client-secret");
//! let client = FatSecretClient::new(config);
//! let results = client.search_default("greek yogurt").await?;
//! println!("{} of {} products", results.products.len(), results.total_count);
//! # Ok(())
//! # }
//! ```

/// Normalized search result cache
pub mod cache;
/// Search client
pub mod client;
/// Vendor response schema
pub mod models;
/// Vendor record to unified product conversion
pub mod normalize;
/// OAuth access token store
pub mod token;
/// HTTP transport seam
pub mod transport;

pub use cache::SearchCache;
pub use client::FatSecretClient;
pub use normalize::{normalize_food, parse_search_response};
pub use token::{AccessToken, TokenStore};
pub use transport::{FoodApiTransport, FormRequest, ReqwestTransport, RequestAuth, TransportResponse};
