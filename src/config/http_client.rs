// ABOUTME: Shared HTTP client timeout configuration loaded from the environment
// ABOUTME: Consumed once at startup by the shared reqwest client initializer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{env_var_or, ConfigError};

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Timeouts for the shared HTTP client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connection establishment timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl HttpClientConfig {
    /// Load HTTP client timeouts from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            timeout_secs: env_var_or("HTTP_CLIENT_TIMEOUT_SECS", "30")
                .parse()
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            connect_timeout_secs: env_var_or("HTTP_CLIENT_CONNECT_TIMEOUT_SECS", "10")
                .parse()
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Validate timeout values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if either timeout is zero or the
    /// connect timeout exceeds the request timeout
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 || self.connect_timeout_secs == 0 {
            return Err(ConfigError::InvalidRange(
                "HTTP client timeouts must be greater than zero",
            ));
        }
        if self.connect_timeout_secs > self.timeout_secs {
            return Err(ConfigError::InvalidRange(
                "HTTP connect timeout cannot exceed the request timeout",
            ));
        }
        Ok(())
    }
}
