//! # Rate Cache
//!
//! Port and in-memory implementation for quote caching.
//!
//! The cache absorbs repeated identical quote requests within a TTL
//! window. Its contract is deliberately narrow: absent results are never
//! persisted — [`RateCache::put`] takes a present value by construction —
//! so a transient carrier failure is retried on the very next call instead
//! of being pinned as a negative entry for the TTL window.
//!
//! [`InMemoryRateCache`] is the bundled implementation: a thread-safe map
//! with lazy expiry, suitable for single-process deployments and tests.
//! Hosts with an external cache implement [`RateCache`] over it.
//!
//! # Examples
//!
//! ```
//! use dhl_rates::infrastructure::cache::{InMemoryRateCache, RateCache};
//! use rust_decimal::Decimal;
//! use std::time::Duration;
//!
//! # tokio_test::block_on(async {
//! let cache = InMemoryRateCache::new();
//! cache.put("key", Decimal::new(4250, 2), Duration::from_secs(600)).await;
//! assert_eq!(cache.get("key").await, Some(Decimal::new(4250, 2)));
//! # });
//! ```

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Port for TTL-bound quote caching.
///
/// Implementations must be safe for concurrent use. Atomic get-or-compute
/// is not required: two racing misses that each call the carrier once are
/// acceptable.
#[async_trait]
pub trait RateCache: Send + Sync {
    /// Returns the cached quote for the key, if present and unexpired.
    async fn get(&self, key: &str) -> Option<Decimal>;

    /// Stores a quote under the key for the given time-to-live.
    ///
    /// Only present values can be stored; "no rate" outcomes are never
    /// cached.
    async fn put(&self, key: &str, value: Decimal, ttl: Duration);
}

/// A cached value with its expiry deadline.
#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    value: Decimal,
    expires_at: Instant,
}

/// In-memory implementation of [`RateCache`].
///
/// Uses a thread-safe `HashMap` with lazy expiry: entries are dropped
/// when a lookup finds them stale.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRateCache {
    storage: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl InMemoryRateCache {
    /// Creates a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries, including not-yet-collected stale
    /// ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all entries.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

#[async_trait]
impl RateCache for InMemoryRateCache {
    async fn get(&self, key: &str) -> Option<Decimal> {
        {
            let storage = self.storage.read().await;
            match storage.get(key) {
                Some(entry) if entry.expires_at > Instant::now() => return Some(entry.value),
                Some(_) => {}
                None => return None,
            }
        }

        // Stale entry: collect it under the write lock.
        let mut storage = self.storage.write().await;
        if let Some(entry) = storage.get(key) {
            if entry.expires_at > Instant::now() {
                return Some(entry.value);
            }
            storage.remove(key);
        }
        None
    }

    async fn put(&self, key: &str, value: Decimal, ttl: Duration) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + ttl,
        };
        let mut storage = self.storage.write().await;
        storage.insert(key.to_string(), entry);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_missing_key() {
        let cache = InMemoryRateCache::new();
        assert_eq!(cache.get("absent").await, None);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn put_then_get() {
        let cache = InMemoryRateCache::new();
        cache
            .put("key", Decimal::new(3850, 2), Duration::from_secs(60))
            .await;
        assert_eq!(cache.get("key").await, Some(Decimal::new(3850, 2)));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn expired_entry_is_dropped() {
        let cache = InMemoryRateCache::new();
        cache
            .put("key", Decimal::new(3850, 2), Duration::from_millis(10))
            .await;
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(cache.get("key").await, None);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn overwrite_refreshes_value() {
        let cache = InMemoryRateCache::new();
        cache
            .put("key", Decimal::new(100, 0), Duration::from_secs(60))
            .await;
        cache
            .put("key", Decimal::new(200, 0), Duration::from_secs(60))
            .await;
        assert_eq!(cache.get("key").await, Some(Decimal::new(200, 0)));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let cache = InMemoryRateCache::new();
        cache
            .put("key", Decimal::new(100, 0), Duration::from_secs(60))
            .await;
        cache.clear().await;
        assert!(cache.is_empty());
    }
}
