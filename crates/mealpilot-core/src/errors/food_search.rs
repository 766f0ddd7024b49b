// ABOUTME: Error taxonomy for the food database search client
// ABOUTME: Covers credential exchange failures, search failures, and request timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Service name used when food search failures are reported as `AppError`
const FOOD_DATABASE_SERVICE: &str = "FatSecret";

/// Errors produced by the food search client.
///
/// None of these are retried by the client. A 401 from the search endpoint
/// clears the cached token so the next caller-initiated search re-authenticates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoodSearchError {
    /// Credential exchange returned a non-success status
    #[error("credential exchange failed with HTTP {status}")]
    Auth {
        /// HTTP status returned by the token endpoint
        status: u16,
    },

    /// Search request returned a non-success status
    #[error("food search failed with HTTP {status}")]
    Search {
        /// HTTP status returned by the search endpoint
        status: u16,
    },

    /// Search request did not complete within its budget and was aborted
    #[error("food search timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured request budget in milliseconds
        timeout_ms: u64,
    },

    /// Request could not be sent or the response body could not be read
    #[error("transport error: {0}")]
    Transport(String),

    /// Vendor response body did not match the expected schema
    #[error("invalid vendor response: {0}")]
    InvalidResponse(String),

    /// No client credentials are configured
    #[error("client credentials are not configured")]
    NotConfigured,
}

impl FoodSearchError {
    /// HTTP status carried by the error, if the vendor answered at all
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status } | Self::Search { status } => Some(*status),
            Self::Timeout { .. }
            | Self::Transport(_)
            | Self::InvalidResponse(_)
            | Self::NotConfigured => None,
        }
    }

    /// Whether this failure is the search endpoint rejecting the access token
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Search { status: 401 })
    }
}

impl From<FoodSearchError> for AppError {
    fn from(error: FoodSearchError) -> Self {
        let code = match &error {
            FoodSearchError::Auth { .. } => ErrorCode::ExternalAuthFailed,
            FoodSearchError::Search { .. } | FoodSearchError::InvalidResponse(_) => {
                ErrorCode::ExternalServiceError
            }
            FoodSearchError::Timeout { .. } | FoodSearchError::Transport(_) => {
                ErrorCode::ExternalServiceUnavailable
            }
            FoodSearchError::NotConfigured => ErrorCode::ConfigMissing,
        };
        Self::new(code, format!("{FOOD_DATABASE_SERVICE}: {error}")).with_source(error)
    }
}
