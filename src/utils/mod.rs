// ABOUTME: Utility modules shared across the application
// ABOUTME: Contains the clock abstraction and the shared HTTP client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Wall-clock abstraction
pub mod clock;
/// HTTP client configuration and helpers
pub mod http_client;

pub use clock::{Clock, SystemClock};
