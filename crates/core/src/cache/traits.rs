use async_trait::async_trait;

use super::Result;

/// Key-value store backing the cache-aside lookups.
///
/// Entries have no TTL and there is no invalidation path: once written, a
/// value stays until the backing store drops it.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Stores a value under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;
}
