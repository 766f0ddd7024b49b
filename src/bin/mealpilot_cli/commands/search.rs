// ABOUTME: Food database search command
// ABOUTME: Builds the client from environment and prints the normalized result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use mealpilot::config::HttpClientConfig;
use mealpilot::errors::AppError;
use mealpilot::external::FatSecretClient;
use mealpilot::utils::http_client::initialize_shared_client;
use std::time::Duration;
use tracing::{info, warn};

pub async fn run(query: &str, page_size: u32, timeout_ms: Option<u64>) -> Result<String> {
    let http_config = HttpClientConfig::from_env();
    http_config.validate().map_err(AppError::from)?;
    initialize_shared_client(&http_config);

    let client = FatSecretClient::from_env().map_err(AppError::from)?;
    if !client.is_enabled() {
        warn!("FATSECRET_CLIENT_ID/FATSECRET_CLIENT_SECRET not set, search is disabled");
    }

    let timeout = timeout_ms.map_or_else(
        || client.config().search_timeout(),
        Duration::from_millis,
    );
    let result = client
        .search(query, page_size, timeout)
        .await
        .map_err(AppError::from)?;

    info!(
        products = result.products.len(),
        total = result.total_count,
        "Search complete"
    );
    serde_json::to_string_pretty(&result).context("serializing search result")
}
