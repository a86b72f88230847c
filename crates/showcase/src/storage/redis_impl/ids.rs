use async_trait::async_trait;
use redis::AsyncCommands;

use showcase_core::orders::{sequence_key, EntityId, IdGenerator, Result};

use super::error::map_sequence_error;

/// Id sequences backed by `INCR {keyspace}:seq`.
///
/// `INCR` starts from 1 on a missing key and is atomic, so every instance
/// sharing the Redis server draws from one sequence.
pub struct RedisIdGenerator {
    conn: redis::aio::ConnectionManager,
}

impl RedisIdGenerator {
    pub fn new(conn: redis::aio::ConnectionManager) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl IdGenerator for RedisIdGenerator {
    async fn next_id(&self, keyspace: &str) -> Result<EntityId> {
        let mut conn = self.conn.clone();
        let next: u64 = conn
            .incr(sequence_key(keyspace), 1u64)
            .await
            .map_err(map_sequence_error)?;
        EntityId::try_from(next)
    }
}
