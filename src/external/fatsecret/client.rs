// ABOUTME: FatSecret search client combining token store, transport, cache, and normalizer
// ABOUTME: Missing credentials put the client in a soft-disabled mode returning empty results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::cache::SearchCache;
use super::normalize::parse_search_response;
use super::token::TokenStore;
use super::transport::{FoodApiTransport, FormRequest, ReqwestTransport, RequestAuth};
use crate::config::{ConfigError, FoodSearchConfig};
use crate::utils::{Clock, SystemClock};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use mealpilot_core::constants::cache::SEARCH_CACHE_TTL_SECS;
use mealpilot_core::constants::food_database::{
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MAX_QUERY_CHARS, SEARCH_METHOD,
};
use mealpilot_core::errors::FoodSearchError;
use mealpilot_core::models::UnifiedSearchResult;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::timeout;
use tracing::{debug, warn};

/// FatSecret platform API client
pub struct FatSecretClient {
    config: FoodSearchConfig,
    transport: Arc<dyn FoodApiTransport>,
    clock: Arc<dyn Clock>,
    token: TokenStore,
    cache: Mutex<SearchCache>,
}

impl FatSecretClient {
    /// Create a client using the shared HTTP client and the system clock
    #[must_use]
    pub fn new(config: FoodSearchConfig) -> Self {
        Self::with_transport(
            config,
            Arc::new(ReqwestTransport::default()),
            Arc::new(SystemClock),
        )
    }

    /// Create a client with an explicit transport and clock
    #[must_use]
    pub fn with_transport(
        config: FoodSearchConfig,
        transport: Arc<dyn FoodApiTransport>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let ttl = i64::try_from(config.cache_ttl_secs)
            .ok()
            .and_then(ChronoDuration::try_seconds)
            .unwrap_or_else(|| {
                warn!(
                    ttl_secs = config.cache_ttl_secs,
                    "Search cache TTL out of range, using default"
                );
                ChronoDuration::seconds(SEARCH_CACHE_TTL_SECS as i64)
            });
        let cache = SearchCache::new(config.cache_max_entries, ttl);
        Self {
            config,
            transport,
            clock,
            token: TokenStore::new(),
            cache: Mutex::new(cache),
        }
    }

    /// Create a client from environment configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a numeric setting does not parse or fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = FoodSearchConfig::from_env()?;
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Whether credentials are configured; a disabled client returns empty results
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    /// Client configuration
    #[must_use]
    pub const fn config(&self) -> &FoodSearchConfig {
        &self.config
    }

    /// Current access token, exchanging credentials if the cached one is stale
    ///
    /// # Errors
    ///
    /// Returns `FoodSearchError::NotConfigured` without credentials, otherwise
    /// any error from the credential exchange
    pub async fn access_token(&self) -> Result<String, FoodSearchError> {
        let credentials = self
            .config
            .credentials
            .as_ref()
            .ok_or(FoodSearchError::NotConfigured)?;
        self.token
            .get_token(
                self.transport.as_ref(),
                &self.config.token_url,
                credentials,
                self.clock.as_ref(),
            )
            .await
    }

    /// Search with the default page size and configured timeout
    ///
    /// # Errors
    ///
    /// See [`FatSecretClient::search`]
    pub async fn search_default(&self, query: &str) -> Result<UnifiedSearchResult, FoodSearchError> {
        self.search(query, DEFAULT_PAGE_SIZE, self.config.search_timeout())
            .await
    }

    /// Search the food database
    ///
    /// Results are cached per normalized query and page size. Only the search
    /// request itself is bounded by `request_timeout`; the credential exchange
    /// is not. No request is retried: a 401 clears the token so the next call
    /// re-authenticates.
    ///
    /// # Errors
    ///
    /// - `Auth` when the credential exchange is rejected
    /// - `Search` when the search endpoint answers with a non-success status
    /// - `Timeout` when the search request exceeds `request_timeout`
    /// - `Transport` or `InvalidResponse` for network or schema failures
    pub async fn search(
        &self,
        query: &str,
        page_size: u32,
        request_timeout: Duration,
    ) -> Result<UnifiedSearchResult, FoodSearchError> {
        if !self.is_enabled() {
            debug!("FatSecret credentials not configured, returning empty results");
            return Ok(UnifiedSearchResult::empty());
        }

        let query: String = query.trim().chars().take(MAX_QUERY_CHARS).collect();
        if query.is_empty() {
            return Ok(UnifiedSearchResult::empty());
        }

        let cache_key = SearchCache::key(&query, page_size);
        let cached = self.cache.lock().await.get(&cache_key, self.clock.now());
        if let Some(cached) = cached {
            debug!(key = %cache_key, "FatSecret search cache hit");
            return Ok(cached);
        }
        debug!(key = %cache_key, "FatSecret search cache miss");

        let token = self.access_token().await?;
        let request = FormRequest::new(&self.config.api_url, RequestAuth::Bearer(token))
            .field("method", SEARCH_METHOD)
            .field("search_expression", query.as_str())
            .field("max_results", page_size.clamp(1, MAX_PAGE_SIZE).to_string())
            .field("page_number", "0")
            .field("format", "json")
            .field("flag_default_serving", "true");

        let timeout_ms = u64::try_from(request_timeout.as_millis()).unwrap_or(u64::MAX);
        let Ok(sent) = timeout(request_timeout, self.transport.post_form(request)).await else {
            warn!(timeout_ms, query = %query, "FatSecret search timed out, request aborted");
            return Err(FoodSearchError::Timeout { timeout_ms });
        };
        let response = sent?;

        if response.status == 401 {
            warn!("FatSecret rejected access token, clearing it for the next search");
            self.token.invalidate().await;
        }
        if !response.is_success() {
            return Err(FoodSearchError::Search {
                status: response.status,
            });
        }

        let result = parse_search_response(&response.body)?;
        let evicted = self
            .cache
            .lock()
            .await
            .insert(cache_key, result.clone(), self.clock.now());
        if let Some(evicted) = evicted {
            debug!(evicted = %evicted, "FatSecret search cache full, evicted oldest entry");
        }
        Ok(result)
    }

    /// Remove every cached search result
    pub async fn clear_cache(&self) {
        self.cache.lock().await.clear();
    }

    /// Number of cached search results
    pub async fn cache_len(&self) -> usize {
        self.cache.lock().await.len()
    }

    /// Drop the cached access token
    pub async fn invalidate_token(&self) {
        self.token.invalidate().await;
    }

    /// Expiry of the cached access token, `None` before the first exchange
    pub async fn token_expires_at(&self) -> Option<DateTime<Utc>> {
        self.token.expires_at().await
    }
}
