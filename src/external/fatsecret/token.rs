// ABOUTME: OAuth client-credentials access token store for the food database vendor
// ABOUTME: Reuses the cached token until 60 seconds before expiry, then re-exchanges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::models::TokenResponse;
use super::transport::{FoodApiTransport, FormRequest, RequestAuth};
use crate::config::FoodApiCredentials;
use crate::utils::Clock;
use chrono::{DateTime, Duration, Utc};
use mealpilot_core::constants::food_database::{
    DEFAULT_TOKEN_LIFETIME_SECS, MAX_TOKEN_LIFETIME_SECS, TOKEN_REFRESH_MARGIN_SECS,
    TOKEN_SCOPE,
};
use mealpilot_core::errors::FoodSearchError;
use std::fmt;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// A bearer token and the instant it stops being valid
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// Token value sent as `Authorization: Bearer`
    pub value: String,
    /// Expiry computed from the vendor's declared lifetime
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Whether the token stays valid for at least the refresh margin
    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(TOKEN_REFRESH_MARGIN_SECS) <= self.expires_at
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Owned, injectable holder for the current access token
#[derive(Debug, Default)]
pub struct TokenStore {
    current: Mutex<Option<AccessToken>>,
}

impl TokenStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a valid access token, exchanging credentials when needed
    ///
    /// The lock is released during the exchange request, so concurrent callers
    /// that all observe a stale token may each perform an exchange. The
    /// declared lifetime is clamped to `0..=MAX_TOKEN_LIFETIME_SECS`.
    ///
    /// # Errors
    ///
    /// Returns `FoodSearchError::Auth` when the token endpoint answers with a
    /// non-success status, `Transport` when it cannot be reached, and
    /// `InvalidResponse` when the body is not a token response
    pub async fn get_token(
        &self,
        transport: &dyn FoodApiTransport,
        token_url: &str,
        credentials: &FoodApiCredentials,
        clock: &dyn Clock,
    ) -> Result<String, FoodSearchError> {
        if let Some(token) = self.current.lock().await.as_ref() {
            if token.is_fresh(clock.now()) {
                debug!("Reusing cached FatSecret access token");
                return Ok(token.value.clone());
            }
        }

        let request = FormRequest::new(
            token_url,
            RequestAuth::Basic {
                client_id: credentials.client_id.clone(),
                client_secret: credentials.client_secret.clone(),
            },
        )
        .field("grant_type", "client_credentials")
        .field("scope", TOKEN_SCOPE);

        let response = transport.post_form(request).await?;
        if !response.is_success() {
            warn!(status = response.status, "FatSecret credential exchange rejected");
            return Err(FoodSearchError::Auth {
                status: response.status,
            });
        }

        let parsed: TokenResponse = serde_json::from_str(&response.body)
            .map_err(|e| FoodSearchError::InvalidResponse(format!("token response: {e}")))?;
        let declared = parsed.expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS);
        let lifetime = declared.clamp(0, MAX_TOKEN_LIFETIME_SECS);
        if lifetime != declared {
            warn!(declared, lifetime, "Clamped FatSecret token lifetime");
        }
        let expires_at = Duration::try_seconds(lifetime)
            .and_then(|ttl| clock.now().checked_add_signed(ttl))
            .ok_or_else(|| {
                FoodSearchError::InvalidResponse(format!("token lifetime out of range: {declared}"))
            })?;
        let token = AccessToken {
            value: parsed.access_token,
            expires_at,
        };

        info!(expires_at = %token.expires_at, "Acquired FatSecret access token");
        let value = token.value.clone();
        *self.current.lock().await = Some(token);
        Ok(value)
    }

    /// Drop the cached token so the next call re-authenticates
    pub async fn invalidate(&self) {
        *self.current.lock().await = None;
    }

    /// Expiry of the cached token, if any
    pub async fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.current.lock().await.as_ref().map(|t| t.expires_at)
    }
}
