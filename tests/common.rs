// ABOUTME: Shared test utilities for food search integration tests
// ABOUTME: Recording fake transport, manual clock, and vendor response fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `mealpilot`

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use mealpilot::config::FoodSearchConfig;
use mealpilot::errors::FoodSearchError;
use mealpilot::external::{FatSecretClient, FoodApiTransport, FormRequest, TransportResponse};
use mealpilot::utils::Clock;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::future;
use std::sync::{Arc, Mutex, Once};

pub const TOKEN_URL: &str = "https://auth.test/connect/token";
pub const API_URL: &str = "https://api.test/rest/server.api";

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Scripted behavior for one request
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Answer with this status and body
    Respond(u16, String),
    /// Fail at the transport level
    Fail(FoodSearchError),
    /// Never answer
    Hang,
}

#[derive(Default)]
struct FakeState {
    token_script: VecDeque<Scripted>,
    search_script: VecDeque<Scripted>,
    requests: Vec<FormRequest>,
    tokens_issued: usize,
}

/// Transport that records every request and answers from per-endpoint scripts
///
/// With an empty script the token endpoint issues `token-N` valid for an hour
/// and the search endpoint returns `default_search_body()`.
#[derive(Default)]
pub struct FakeTransport {
    state: Mutex<FakeState>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_token(&self, scripted: Scripted) {
        self.state.lock().unwrap().token_script.push_back(scripted);
    }

    pub fn push_search(&self, scripted: Scripted) {
        self.state.lock().unwrap().search_script.push_back(scripted);
    }

    pub fn requests(&self) -> Vec<FormRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn token_calls(&self) -> usize {
        self.count(TOKEN_URL)
    }

    pub fn search_calls(&self) -> usize {
        self.count(API_URL)
    }

    pub fn total_calls(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub fn last_search(&self) -> Option<FormRequest> {
        self.state
            .lock()
            .unwrap()
            .requests
            .iter()
            .rev()
            .find(|r| r.url == API_URL)
            .cloned()
    }

    fn count(&self, url: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .requests
            .iter()
            .filter(|r| r.url == url)
            .count()
    }

    fn next(&self, request: FormRequest) -> Scripted {
        let mut state = self.state.lock().unwrap();
        let is_token = request.url == TOKEN_URL;
        state.requests.push(request);
        if is_token {
            if let Some(scripted) = state.token_script.pop_front() {
                return scripted;
            }
            state.tokens_issued += 1;
            Scripted::Respond(
                200,
                json!({
                    "access_token": format!("token-{}", state.tokens_issued),
                    "expires_in": 3600,
                    "token_type": "Bearer"
                })
                .to_string(),
            )
        } else {
            state
                .search_script
                .pop_front()
                .unwrap_or_else(|| Scripted::Respond(200, default_search_body()))
        }
    }
}

#[async_trait]
impl FoodApiTransport for FakeTransport {
    async fn post_form(&self, request: FormRequest) -> Result<TransportResponse, FoodSearchError> {
        match self.next(request) {
            Scripted::Respond(status, body) => Ok(TransportResponse { status, body }),
            Scripted::Fail(error) => Err(error),
            Scripted::Hang => future::pending().await,
        }
    }
}

/// Clock that only moves when told to
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap()),
        })
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Configuration with credentials pointing at the fake endpoints
pub fn test_config() -> FoodSearchConfig {
    FoodSearchConfig {
        token_url: TOKEN_URL.to_owned(),
        api_url: API_URL.to_owned(),
        ..FoodSearchConfig::default()
    }
    .with_credentials("test-client", "test-secret")
}

/// Client wired to a fresh fake transport and manual clock
pub fn test_client() -> (FatSecretClient, Arc<FakeTransport>, Arc<ManualClock>) {
    init_test_logging();
    let transport = FakeTransport::new();
    let clock = ManualClock::new();
    let client = FatSecretClient::with_transport(test_config(), transport.clone(), clock.clone());
    (client, transport, clock)
}

/// A vendor food record with a single serving object
pub fn food(id: &str, name: &str, calories: &str, protein: &str) -> Value {
    json!({
        "food_id": id,
        "food_name": name,
        "food_type": "Generic",
        "servings": {
            "serving": {
                "serving_description": "1 cup",
                "metric_serving_amount": "240.000",
                "metric_serving_unit": "G",
                "calories": calories,
                "protein": protein,
                "carbohydrate": "10.00",
                "fat": "2.50",
                "fiber": "1.234"
            }
        }
    })
}

/// A `foods.search` body wrapping the given food value (object or array)
pub fn search_body(food: Value, total_results: u64) -> String {
    json!({
        "foods": {
            "food": food,
            "max_results": "25",
            "page_number": "0",
            "total_results": total_results.to_string()
        }
    })
    .to_string()
}

pub fn default_search_body() -> String {
    search_body(
        json!([
            food("1001", "Greek Yogurt", "130", "17.3"),
            food("1002", "Rolled Oats", "150", "5")
        ]),
        42,
    )
}
