//! In-memory cache implementation.
//!
//! The store is an LRU bounded by `CACHE_MAX_ENTRIES` so a long-running
//! process cannot grow it without limit. The bound is a property of this
//! provider only; the default (10,000) is far above the number of distinct
//! order ids the demo ever looks up, so entries are never dropped in practice.

use std::num::NonZeroUsize;
use std::sync::Arc;

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;

use showcase_core::cache::{Cache, Result};

/// In-memory cache implementation.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, Vec<u8>>>>,
}

impl MemoryCache {
    /// Creates a new in-memory cache holding at most `max_entries` entries.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut store = self.store.write().await;
        Ok(store.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut store = self.store.write().await;
        store.put(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::cache::{cache_key, ORDER_BY_ID_CACHE};

    /// Default max entries for tests
    const TEST_MAX_ENTRIES: usize = 1000;

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        let key = cache_key(ORDER_BY_ID_CACHE, 1);

        cache.set(&key, b"order").await.unwrap();

        assert_eq!(cache.get(&key).await.unwrap(), Some(b"order".to_vec()));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        assert_eq!(cache.get("order-by-id::404").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        let key = cache_key(ORDER_BY_ID_CACHE, 2);

        cache.set(&key, b"old").await.unwrap();
        cache.set(&key, b"new").await.unwrap();

        assert_eq!(cache.get(&key).await.unwrap(), Some(b"new".to_vec()));
    }

    #[tokio::test]
    async fn test_entries_do_not_expire() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        let key = cache_key(ORDER_BY_ID_CACHE, 3);

        cache.set(&key, b"forever").await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;

        assert!(cache.get(&key).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_entries_below_capacity_are_all_kept() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);

        for id in 1..=TEST_MAX_ENTRIES {
            cache.set(&cache_key(ORDER_BY_ID_CACHE, id), b"order").await.unwrap();
        }

        for id in 1..=TEST_MAX_ENTRIES {
            let key = cache_key(ORDER_BY_ID_CACHE, id);
            assert!(cache.get(&key).await.unwrap().is_some(), "{key} was dropped");
        }
    }

    #[tokio::test]
    async fn test_capacity_bounds_the_store() {
        let cache = MemoryCache::new(2);

        cache.set("order-by-id::1", b"1").await.unwrap();
        cache.set("order-by-id::2", b"2").await.unwrap();
        cache.set("order-by-id::3", b"3").await.unwrap();

        assert_eq!(cache.store.read().await.len(), 2);
        assert!(cache.get("order-by-id::3").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        let clone = cache.clone();

        cache.set("order-by-id::1", b"1").await.unwrap();

        assert!(clone.get("order-by-id::1").await.unwrap().is_some());
    }
}
