//! Application state with trait-object backends.
//!
//! This module defines the shared application state passed to request
//! handlers and runners. Every backend sits behind a core trait so the same
//! wiring serves both the Redis and the in-memory backends.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use tokio::sync::broadcast;

use showcase_core::geo::GeoIndex;
use showcase_core::messaging::PubSub;
use showcase_core::orders::{EntityId, IdGenerator, OrderId, OrderLookup, Result as OrderResult};
use showcase_core::storage::{LineItemRepository, OrderRepository};
use showcase_session::{SessionConfig, SessionState};

use crate::config::{Backend, Config};

/// Shared application state.
///
/// Cloned for each request handler; everything inside is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderRepository>,
    pub line_items: Arc<dyn LineItemRepository>,
    /// Id sequences for orders and line items.
    pub ids: Arc<dyn IdGenerator>,
    pub geo: Arc<dyn GeoIndex>,
    pub pubsub: Arc<dyn PubSub>,
    /// Slow order lookup wrapped in the cache.
    pub order_lookup: Arc<dyn OrderLookup>,
    pub sessions: SessionState,

    /// Ids of the orders appended to session carts. Starts at 1.
    cart_counter: Arc<AtomicU64>,
    /// Shutdown signal sender for background listeners.
    pub shutdown_tx: broadcast::Sender<()>,
}

/// Backends shared by one `AppState`.
struct Backends {
    orders: Arc<dyn OrderRepository>,
    line_items: Arc<dyn LineItemRepository>,
    ids: Arc<dyn IdGenerator>,
    geo: Arc<dyn GeoIndex>,
    pubsub: Arc<dyn PubSub>,
    order_lookup: Arc<dyn OrderLookup>,
    sessions: SessionState,
}

impl AppState {
    fn build(backends: Backends) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            orders: backends.orders,
            line_items: backends.line_items,
            ids: backends.ids,
            geo: backends.geo,
            pubsub: backends.pubsub,
            order_lookup: backends.order_lookup,
            sessions: backends.sessions,
            cart_counter: Arc::new(AtomicU64::new(1)),
            shutdown_tx,
        }
    }

    /// Creates the state for the selected backend.
    ///
    /// # Errors
    ///
    /// Fails if a Redis connection cannot be established, or if Redis was
    /// requested from a build without the `redis` feature.
    pub async fn new(
        config: &Config,
        session_config: SessionConfig,
        backend: Backend,
    ) -> anyhow::Result<Self> {
        tracing::info!(%backend, "Initializing backends");

        let backends = match backend {
            Backend::Memory => memory::backends(config, session_config),
            #[cfg(feature = "redis")]
            Backend::Redis => redis::backends(config, session_config).await?,
            #[cfg(not(feature = "redis"))]
            Backend::Redis => {
                anyhow::bail!("built without the 'redis' feature; use --backend memory")
            }
        };

        Ok(Self::build(backends))
    }

    /// Returns the id of the next order appended to a session cart.
    pub fn next_cart_order_id(&self) -> OrderResult<OrderId> {
        EntityId::try_from(self.cart_counter.fetch_add(1, Ordering::SeqCst))
    }

    /// Signal all background listeners to shut down.
    pub fn signal_shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

impl AsRef<SessionState> for AppState {
    fn as_ref(&self) -> &SessionState {
        &self.sessions
    }
}

// ============================================================================
// Factory functions for each backend
// ============================================================================

mod memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::geo::MemoryGeoIndex;
    use crate::messaging::MemoryPubSub;
    use crate::services::{CachedOrderLookup, SlowOrderLookup};
    use crate::storage::{InMemoryIdGenerator, InMemoryRepository};
    use showcase_session::MemorySessionStore;

    /// In-memory backends. Nothing survives a restart.
    pub(super) fn backends(config: &Config, session_config: SessionConfig) -> Backends {
        let repository = Arc::new(InMemoryRepository::new());
        let order_lookup = CachedOrderLookup::new(
            Arc::new(SlowOrderLookup::new(config.order_lookup_delay())),
            Arc::new(MemoryCache::new(config.cache_max_entries)),
        );

        Backends {
            orders: repository.clone(),
            line_items: repository,
            ids: Arc::new(InMemoryIdGenerator::new()),
            geo: Arc::new(MemoryGeoIndex::new()),
            pubsub: Arc::new(MemoryPubSub::new()),
            order_lookup: Arc::new(order_lookup),
            sessions: SessionState::new(Arc::new(MemorySessionStore::new()), session_config),
        }
    }
}

#[cfg(feature = "redis")]
mod redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::geo::RedisGeoIndex;
    use crate::messaging::RedisPubSub;
    use crate::services::{CachedOrderLookup, SlowOrderLookup};
    use crate::storage::{RedisIdGenerator, RedisRepository};
    use showcase_session::RedisSessionStore;

    /// Redis backends: one connection manager for repositories, ids and geo,
    /// a dedicated one for the cache, a pub/sub client and a fred pool for
    /// sessions.
    pub(super) async fn backends(
        config: &Config,
        session_config: SessionConfig,
    ) -> anyhow::Result<Backends> {
        let client = ::redis::Client::open(config.redis_url.as_str())?;
        let conn = ::redis::aio::ConnectionManager::new(client).await?;

        let repository = Arc::new(RedisRepository::new(conn.clone()));
        let order_lookup = CachedOrderLookup::new(
            Arc::new(SlowOrderLookup::new(config.order_lookup_delay())),
            Arc::new(RedisCache::connect(&config.redis_url).await?),
        );
        let pubsub = RedisPubSub::connect(&config.redis_url).await?;
        let session_store =
            RedisSessionStore::connect(&config.redis_url, session_config.pool_size).await?;

        tracing::info!(redis_url = %config.redis_url, "Connected to Redis");

        Ok(Backends {
            orders: repository.clone(),
            line_items: repository,
            ids: Arc::new(RedisIdGenerator::new(conn.clone())),
            geo: Arc::new(RedisGeoIndex::new(conn)),
            pubsub: Arc::new(pubsub),
            order_lookup: Arc::new(order_lookup),
            sessions: SessionState::new(Arc::new(session_store), session_config),
        })
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
