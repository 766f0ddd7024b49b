// ABOUTME: Re-exports the unified error types from mealpilot-core
// ABOUTME: Adds the conversion from configuration errors into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! The error taxonomy lives in `mealpilot-core` so both workspace crates share
//! one `AppError`. This module re-exports it for users of the root crate.

pub use mealpilot_core::errors::{AppError, AppResult, ErrorCode, FoodSearchError};

use crate::config::ConfigError;

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_maps_to_config_invalid() {
        let error = AppError::from(ConfigError::InvalidRange("Search timeout must be greater than zero"));
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
        assert!(error.message.contains("Search timeout"));
    }
}
