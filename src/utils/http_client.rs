// ABOUTME: Shared HTTP client with connection pooling and timeout configuration
// ABOUTME: Initialized once from HttpClientConfig, falling back to defaults on first use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::HttpClientConfig;
use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::warn;

/// Global shared HTTP client
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Initialize the shared client from configuration
///
/// Only the first call has an effect; later calls keep the existing client.
pub fn initialize_shared_client(config: &HttpClientConfig) {
    if SHARED_CLIENT.set(build_client(config)).is_err() {
        warn!("Shared HTTP client already initialized, ignoring new configuration");
    }
}

/// Get the shared HTTP client, creating it with default timeouts if needed
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| build_client(&HttpClientConfig::default()))
}

/// Build a client with the configured request and connect timeouts
#[must_use]
pub fn build_client(config: &HttpClientConfig) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}
