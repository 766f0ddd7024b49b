// ABOUTME: Food database vendor configuration: credentials, endpoints, cache, and timeout
// ABOUTME: Absent credentials select the soft-disabled mode rather than failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{env_var_non_empty, env_var_or, ConfigError};
use mealpilot_core::constants::cache::{
    MAX_SEARCH_CACHE_TTL_SECS, SEARCH_CACHE_MAX_ENTRIES, SEARCH_CACHE_TTL_SECS,
};
use mealpilot_core::constants::food_database::{
    DEFAULT_API_URL, DEFAULT_SEARCH_TIMEOUT_MS, DEFAULT_TOKEN_URL,
};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// OAuth client credentials for the food database vendor
#[derive(Clone, PartialEq, Eq)]
pub struct FoodApiCredentials {
    /// OAuth client identifier
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
}

impl FoodApiCredentials {
    /// Create credentials from an id/secret pair
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for FoodApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FoodApiCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// Food search client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodSearchConfig {
    /// Vendor credentials; `None` disables the client
    pub credentials: Option<FoodApiCredentials>,
    /// OAuth token endpoint
    pub token_url: String,
    /// REST method endpoint
    pub api_url: String,
    /// Seconds a normalized search result stays cached
    pub cache_ttl_secs: u64,
    /// Maximum number of cached search results
    pub cache_max_entries: usize,
    /// Default per-request search budget in milliseconds
    pub search_timeout_ms: u64,
}

impl Default for FoodSearchConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            token_url: DEFAULT_TOKEN_URL.to_owned(),
            api_url: DEFAULT_API_URL.to_owned(),
            cache_ttl_secs: SEARCH_CACHE_TTL_SECS,
            cache_max_entries: SEARCH_CACHE_MAX_ENTRIES,
            search_timeout_ms: DEFAULT_SEARCH_TIMEOUT_MS,
        }
    }
}

impl FoodSearchConfig {
    /// Load food search configuration from environment
    ///
    /// Credentials are only picked up when both `FATSECRET_CLIENT_ID` and
    /// `FATSECRET_CLIENT_SECRET` are set and non-empty.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if a numeric variable is set but not a number
    pub fn from_env() -> Result<Self, ConfigError> {
        let credentials = match (
            env_var_non_empty("FATSECRET_CLIENT_ID"),
            env_var_non_empty("FATSECRET_CLIENT_SECRET"),
        ) {
            (Some(client_id), Some(client_secret)) => {
                Some(FoodApiCredentials::new(client_id, client_secret))
            }
            _ => None,
        };

        Ok(Self {
            credentials,
            token_url: env_var_or("FATSECRET_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: env_var_or("FATSECRET_API_URL", DEFAULT_API_URL),
            cache_ttl_secs: parse_env("FATSECRET_CACHE_TTL_SECS", SEARCH_CACHE_TTL_SECS)?,
            cache_max_entries: parse_env("FATSECRET_CACHE_MAX_ENTRIES", SEARCH_CACHE_MAX_ENTRIES)?,
            search_timeout_ms: parse_env("FATSECRET_SEARCH_TIMEOUT_MS", DEFAULT_SEARCH_TIMEOUT_MS)?,
        })
    }

    /// Attach vendor credentials, enabling the client
    #[must_use]
    pub fn with_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.credentials = Some(FoodApiCredentials::new(client_id, client_secret));
        self
    }

    /// Whether credentials are configured
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.credentials.is_some()
    }

    /// Cache TTL as a `Duration`
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Default search timeout as a `Duration`
    #[must_use]
    pub const fn search_timeout(&self) -> Duration {
        Duration::from_millis(self.search_timeout_ms)
    }

    /// Validate cache and timeout settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` for a zero TTL, capacity, or timeout,
    /// a TTL above `MAX_SEARCH_CACHE_TTL_SECS`, or an empty endpoint URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_ttl_secs == 0 {
            return Err(ConfigError::InvalidRange(
                "Search cache TTL must be greater than zero",
            ));
        }
        if self.cache_ttl_secs > MAX_SEARCH_CACHE_TTL_SECS {
            return Err(ConfigError::InvalidRange(
                "Search cache TTL cannot exceed one day",
            ));
        }
        if self.cache_max_entries == 0 {
            return Err(ConfigError::InvalidRange(
                "Search cache capacity must be greater than zero",
            ));
        }
        if self.search_timeout_ms == 0 {
            return Err(ConfigError::InvalidRange(
                "Search timeout must be greater than zero",
            ));
        }
        if self.token_url.trim().is_empty() || self.api_url.trim().is_empty() {
            return Err(ConfigError::InvalidRange(
                "Food database endpoint URLs cannot be empty",
            ));
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    env_var_non_empty(key).map_or(Ok(default), |raw| {
        raw.parse()
            .map_err(|_| ConfigError::Parse(format!("{key} must be a number, got '{raw}'")))
    })
}
