// ABOUTME: Bounded TTL cache for normalized search results keyed by query and page size
// ABOUTME: Evicts the oldest-inserted entry when full; reads never change eviction order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Duration, Utc};
use lru::LruCache;
use mealpilot_core::models::UnifiedSearchResult;
use std::num::NonZeroUsize;

/// Cache entry with its creation time
#[derive(Debug, Clone)]
struct CacheEntry {
    result: UnifiedSearchResult,
    created_at: DateTime<Utc>,
}

/// Search result cache with insertion-order eviction
///
/// Backed by `LruCache`, but entries are only ever read with `peek`, so the
/// recency order is the insertion order.
#[derive(Debug)]
pub struct SearchCache {
    entries: LruCache<String, CacheEntry>,
    ttl: Duration,
}

impl SearchCache {
    /// Create a cache holding at most `capacity` entries for `ttl` each
    #[must_use]
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            ttl,
        }
    }

    /// Cache key for a normalized query and page size
    #[must_use]
    pub fn key(query: &str, page_size: u32) -> String {
        format!("{query}:{page_size}")
    }

    /// Fresh entry for `key`; an expired entry is removed and `None` returned
    pub fn get(&mut self, key: &str, now: DateTime<Utc>) -> Option<UnifiedSearchResult> {
        let expired = match self.entries.peek(key) {
            Some(entry) if now - entry.created_at < self.ttl => {
                return Some(entry.result.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            self.entries.pop(key);
        }
        None
    }

    /// Store a result, evicting the oldest entry if at capacity
    ///
    /// Returns the evicted key, if any. Re-inserting an existing key moves it
    /// to the newest position.
    pub fn insert(
        &mut self,
        key: String,
        result: UnifiedSearchResult,
        now: DateTime<Utc>,
    ) -> Option<String> {
        self.entries.pop(&key);
        self.entries
            .push(
                key,
                CacheEntry {
                    result,
                    created_at: now,
                },
            )
            .map(|(evicted, _)| evicted)
    }

    /// Whether `key` is present, fresh or not
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains(key)
    }

    /// Number of stored entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mealpilot_core::constants::cache::SEARCH_CACHE_MAX_ENTRIES;

    fn start() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0)
            .single()
            .unwrap_or_else(Utc::now)
    }

    fn result(count: u64) -> UnifiedSearchResult {
        UnifiedSearchResult {
            products: Vec::new(),
            total_count: count,
        }
    }

    #[test]
    fn test_entry_expires_after_ttl() {
        let now = start();
        let mut cache = SearchCache::new(4, Duration::minutes(5));
        cache.insert(SearchCache::key("oats", 25), result(1), now);

        assert!(cache
            .get("oats:25", now + Duration::seconds(299))
            .is_some());
        assert!(cache.get("oats:25", now + Duration::minutes(5)).is_none());
        assert!(!cache.contains("oats:25"));
    }

    #[test]
    fn test_eviction_ignores_reads() {
        let now = start();
        let mut cache = SearchCache::new(SEARCH_CACHE_MAX_ENTRIES, Duration::minutes(5));
        for i in 0..SEARCH_CACHE_MAX_ENTRIES {
            cache.insert(format!("q{i}:25"), result(0), now);
        }
        // Reading the oldest entry must not save it from eviction
        assert!(cache.get("q0:25", now).is_some());

        let evicted = cache.insert("q-new:25".to_owned(), result(0), now);
        assert_eq!(evicted.as_deref(), Some("q0:25"));
        assert_eq!(cache.len(), SEARCH_CACHE_MAX_ENTRIES);
        assert!(cache.contains("q1:25"));
        assert!(cache.contains("q-new:25"));
    }

    #[test]
    fn test_reinsert_replaces_without_eviction() {
        let now = start();
        let mut cache = SearchCache::new(2, Duration::minutes(5));
        cache.insert("a:25".to_owned(), result(1), now);
        cache.insert("b:25".to_owned(), result(2), now);
        assert!(cache.insert("a:25".to_owned(), result(3), now).is_none());
        assert_eq!(cache.get("a:25", now).map(|r| r.total_count), Some(3));

        // "b" is now the oldest insert
        let evicted = cache.insert("c:25".to_owned(), result(4), now);
        assert_eq!(evicted.as_deref(), Some("b:25"));
    }
}
