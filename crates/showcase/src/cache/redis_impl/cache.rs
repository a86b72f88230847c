//! Redis cache implementation.
//!
//! Each entry is a plain string key written with `SET` and no expiry.

use async_trait::async_trait;
use redis::AsyncCommands;

use showcase_core::cache::{Cache, Result};

use super::error::map_redis_error;

/// Redis cache backend sharing a connection manager.
pub struct RedisCache {
    conn: redis::aio::ConnectionManager,
}

impl RedisCache {
    pub fn new(conn: redis::aio::ConnectionManager) -> Self {
        Self { conn }
    }

    /// Opens a dedicated connection manager to `url`.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ConnectionFailed` if the connection cannot be established.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;
        Ok(Self::new(conn))
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let result: Option<Vec<u8>> = conn.get(key).await.map_err(map_redis_error)?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(map_redis_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use showcase_core::cache::cache_key;
    use uuid::Uuid;

    /// Helper to get Redis URL from environment.
    fn redis_url() -> String {
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    /// Skip test if Redis not available.
    async fn get_test_cache() -> Option<RedisCache> {
        tokio::time::timeout(Duration::from_secs(2), RedisCache::connect(&redis_url()))
            .await
            .ok()?
            .ok()
    }

    /// A cache name no other test run uses.
    fn test_cache_name() -> String {
        format!("test-cache-{}", Uuid::new_v4())
    }

    /// Removes the keys a test wrote; the cache itself has no delete.
    async fn cleanup(cache: &RedisCache, keys: &[String]) {
        let mut conn = cache.conn.clone();
        let _: () = conn.del(keys).await.unwrap();
    }

    #[tokio::test]
    async fn test_redis_set_and_get() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let name = test_cache_name();
        let key = cache_key(&name, 1);

        cache.set(&key, b"hello world").await.unwrap();
        assert_eq!(cache.get(&key).await.unwrap(), Some(b"hello world".to_vec()));

        cleanup(&cache, &[key]).await;
    }

    #[tokio::test]
    async fn test_redis_get_missing() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = cache_key(&test_cache_name(), 404);
        assert!(cache.get(&key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_redis_set_has_no_expiry() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let name = test_cache_name();
        let key = cache_key(&name, 1);
        cache.set(&key, b"kept").await.unwrap();

        let mut conn = cache.conn.clone();
        let ttl: i64 = conn.ttl(&key).await.unwrap();
        assert_eq!(ttl, -1);

        cleanup(&cache, &[key]).await;
    }

    #[tokio::test]
    async fn test_redis_set_writes_no_side_keys() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let name = test_cache_name();
        let first = cache_key(&name, 1);
        let second = cache_key(&name, 2);
        cache.set(&first, b"1").await.unwrap();
        cache.set(&second, b"2").await.unwrap();

        let mut conn = cache.conn.clone();
        let mut keys: Vec<String> = conn.keys(format!("{}*", name)).await.unwrap();
        keys.sort();
        assert_eq!(keys, vec![first.clone(), second.clone()]);

        cleanup(&cache, &[first, second]).await;
    }
}
