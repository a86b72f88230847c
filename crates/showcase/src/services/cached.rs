//! Cached order lookup decorator.
//!
//! Wraps an `OrderLookup` with the cache-aside pattern. Entries are written
//! on a miss and never expired or invalidated.

use std::sync::Arc;

use async_trait::async_trait;

use showcase_core::cache::{cache_key, deserialize_order, serialize_order, Cache, ORDER_BY_ID_CACHE};
use showcase_core::orders::{Order, OrderId, OrderLookup};
use showcase_core::storage::Result;

/// Cache-aside decorator for an [`OrderLookup`].
///
/// # Type Parameters
///
/// * `L` - The underlying lookup
/// * `C` - The cache implementation
pub struct CachedOrderLookup<L, C>
where
    L: OrderLookup,
    C: Cache,
{
    inner: Arc<L>,
    cache: Arc<C>,
}

impl<L, C> CachedOrderLookup<L, C>
where
    L: OrderLookup,
    C: Cache,
{
    pub fn new(inner: Arc<L>, cache: Arc<C>) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl<L, C> OrderLookup for CachedOrderLookup<L, C>
where
    L: OrderLookup + 'static,
    C: Cache + 'static,
{
    async fn by_id(&self, id: OrderId) -> Result<Order> {
        let key = cache_key(ORDER_BY_ID_CACHE, id);

        match self.cache.get(&key).await {
            Ok(Some(bytes)) => match deserialize_order(&bytes) {
                Ok(order) => {
                    tracing::trace!(order_id = %id, "Cache hit for order");
                    return Ok(order);
                }
                Err(err) => {
                    tracing::warn!(order_id = %id, error = %err, "Cached order is unreadable");
                }
            },
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(order_id = %id, error = %err, "Cache read failed");
            }
        }

        tracing::trace!(order_id = %id, "Cache miss for order");
        let order = self.inner.by_id(id).await?;

        match serialize_order(&order) {
            Ok(bytes) => {
                if let Err(err) = self.cache.set(&key, &bytes).await {
                    tracing::warn!(order_id = %id, error = %err, "Failed to cache order");
                }
            }
            Err(err) => {
                tracing::warn!(order_id = %id, error = %err, "Failed to serialize order");
            }
        }

        Ok(order)
    }
}
