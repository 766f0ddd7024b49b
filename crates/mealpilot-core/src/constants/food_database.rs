// ABOUTME: Food database vendor constants for the FatSecret platform API
// ABOUTME: Endpoints, request limits, token lifetimes, and identifier prefixes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// OAuth 2.0 token endpoint
pub const DEFAULT_TOKEN_URL: &str = "https://oauth.fatsecret.com/connect/token";

/// REST method endpoint
pub const DEFAULT_API_URL: &str = "https://platform.fatsecret.com/rest/server.api";

/// Source tag written on every normalized product
pub const SOURCE_NAME: &str = "fatsecret";

/// Prefix that keeps vendor identifiers from colliding with other product sources
pub const PRODUCT_ID_PREFIX: &str = "fatsecret-";

/// Search method name sent in the form body
pub const SEARCH_METHOD: &str = "foods.search";

/// OAuth scope requested during credential exchange
pub const TOKEN_SCOPE: &str = "basic";

/// Token lifetime assumed when the vendor omits `expires_in`
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 86_400; // 24 hours

/// Upper bound applied to a vendor-declared token lifetime
pub const MAX_TOKEN_LIFETIME_SECS: i64 = 10 * DEFAULT_TOKEN_LIFETIME_SECS;

/// Tokens closer than this to expiry are refreshed before use
pub const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

/// Queries are truncated to this many characters
pub const MAX_QUERY_CHARS: usize = 200;

/// Default number of results requested per search
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Vendor-imposed cap on results per page
pub const MAX_PAGE_SIZE: u32 = 50;

/// Default per-request search budget in milliseconds
pub const DEFAULT_SEARCH_TIMEOUT_MS: u64 = 5_000;

/// Serving size used when the vendor omits the metric amount
pub const DEFAULT_SERVING_SIZE: f64 = 100.0;

/// Serving unit used when the vendor omits the metric unit
pub const DEFAULT_SERVING_UNIT: &str = "g";
