// ABOUTME: External API client modules (FatSecret platform food database)
// ABOUTME: Provides vendor search with token management, normalization, and caching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients
//!
//! This module contains clients for the external food database used by `MealPilot`.

pub mod fatsecret;

// Re-export commonly used types
pub use fatsecret::{
    normalize_food, parse_search_response, FatSecretClient, FoodApiTransport, FormRequest,
    ReqwestTransport, RequestAuth, TransportResponse,
};
