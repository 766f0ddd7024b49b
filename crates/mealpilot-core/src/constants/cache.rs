// ABOUTME: Search cache constants for TTL and capacity
// ABOUTME: Bounds the in-memory cache of normalized food search results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Normalized search results expire after this many seconds
pub const SEARCH_CACHE_TTL_SECS: u64 = 300; // 5 minutes

/// Largest accepted search cache TTL
pub const MAX_SEARCH_CACHE_TTL_SECS: u64 = 86_400; // 24 hours

/// Maximum number of cached search results before the oldest is evicted
pub const SEARCH_CACHE_MAX_ENTRIES: usize = 50;
