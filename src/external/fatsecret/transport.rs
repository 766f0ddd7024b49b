// ABOUTME: HTTP transport seam for the food database client
// ABOUTME: ReqwestTransport posts form bodies in production; tests substitute a recording fake
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::utils::http_client::shared_client;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use mealpilot_core::errors::FoodSearchError;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use std::fmt;

/// Authorization attached to a vendor request
#[derive(Clone, PartialEq, Eq)]
pub enum RequestAuth {
    /// HTTP Basic credentials for the token endpoint
    Basic {
        /// OAuth client identifier
        client_id: String,
        /// OAuth client secret
        client_secret: String,
    },
    /// Bearer access token for the REST endpoint
    Bearer(String),
}

impl RequestAuth {
    /// Value of the `Authorization` header
    #[must_use]
    pub fn header_value(&self) -> String {
        match self {
            Self::Basic {
                client_id,
                client_secret,
            } => format!(
                "Basic {}",
                STANDARD.encode(format!("{client_id}:{client_secret}"))
            ),
            Self::Bearer(token) => format!("Bearer {token}"),
        }
    }
}

impl fmt::Debug for RequestAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { client_id, .. } => f
                .debug_struct("Basic")
                .field("client_id", client_id)
                .field("client_secret", &"[REDACTED]")
                .finish(),
            Self::Bearer(_) => f.debug_tuple("Bearer").field(&"[REDACTED]").finish(),
        }
    }
}

/// A form-encoded POST request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    /// Target URL
    pub url: String,
    /// Authorization header
    pub auth: RequestAuth,
    /// Form fields in send order
    pub form: Vec<(String, String)>,
}

impl FormRequest {
    /// Create a request with no form fields yet
    #[must_use]
    pub fn new(url: impl Into<String>, auth: RequestAuth) -> Self {
        Self {
            url: url.into(),
            auth,
            form: Vec::new(),
        }
    }

    /// Append a form field
    #[must_use]
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.form.push((key.to_owned(), value.into()));
        self
    }

    /// Look up a form field by name
    #[must_use]
    pub fn form_value(&self, key: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Status and body of a vendor response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: String,
}

impl TransportResponse {
    /// Whether the status is 2xx
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Sends form-encoded requests to the vendor
#[async_trait]
pub trait FoodApiTransport: Send + Sync {
    /// POST a form body and return the status and body
    ///
    /// Non-success statuses are returned as responses, not errors.
    ///
    /// # Errors
    ///
    /// Returns `FoodSearchError::Transport` if the request cannot be sent or
    /// the body cannot be read
    async fn post_form(&self, request: FormRequest) -> Result<TransportResponse, FoodSearchError>;
}

/// Production transport on a pooled `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Wrap an existing client
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(shared_client().clone())
    }
}

#[async_trait]
impl FoodApiTransport for ReqwestTransport {
    async fn post_form(&self, request: FormRequest) -> Result<TransportResponse, FoodSearchError> {
        let response = self
            .client
            .post(&request.url)
            .header(AUTHORIZATION, request.auth.header_value())
            .form(&request.form)
            .send()
            .await
            .map_err(|e| FoodSearchError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FoodSearchError::Transport(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_header_is_base64_of_id_and_secret() {
        let auth = RequestAuth::Basic {
            client_id: "id".to_owned(),
            client_secret: "secret".to_owned(),
        };
        assert_eq!(auth.header_value(), "Basic aWQ6c2VjcmV0");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let basic = RequestAuth::Basic {
            client_id: "id".to_owned(),
            client_secret: "hunter2".to_owned(),
        };
        let bearer = RequestAuth::Bearer("tok-123".to_owned());
        assert!(!format!("{basic:?}").contains("hunter2"));
        assert!(!format!("{bearer:?}").contains("tok-123"));
    }

    #[test]
    fn test_form_value_lookup() {
        let request = FormRequest::new("https://example.test", RequestAuth::Bearer("t".into()))
            .field("method", "foods.search")
            .field("page_number", "0");
        assert_eq!(request.form_value("method"), Some("foods.search"));
        assert_eq!(request.form_value("missing"), None);
    }
}
