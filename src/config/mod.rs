// ABOUTME: Configuration module for the food search client and shared HTTP client
// ABOUTME: Environment-only configuration with validated defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for `MealPilot`
//!
//! All settings come from environment variables. Missing food database
//! credentials are not an error: the search client runs in a disabled mode
//! that returns empty results.

/// Food database vendor settings (credentials, endpoints, cache, timeout)
pub mod food_search;
/// Shared HTTP client timeouts
pub mod http_client;

pub use food_search::{FoodApiCredentials, FoodSearchConfig};
pub use http_client::HttpClientConfig;

use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Value outside acceptable range
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Read an environment variable, falling back to a default
pub(crate) fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Read a non-empty, trimmed environment variable
pub(crate) fn env_var_non_empty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
