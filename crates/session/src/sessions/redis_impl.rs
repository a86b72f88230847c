//! Redis session storage implementation.

use async_trait::async_trait;
use chrono::Utc;
use fred::error::{Error as RedisError, ErrorKind};
use fred::prelude::*;
use showcase_core::session::{Result, Session, SessionError, SessionId, SessionRepository};

/// Redis-backed session storage.
///
/// Each session is a JSON string under `session:{id}` that expires together
/// with the session.
pub struct RedisSessionStore {
    pool: Pool,
}

impl RedisSessionStore {
    /// Creates a new Redis session store from an initialized pool.
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Connects a pool of `pool_size` clients to `redis_url`.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionFailed` if the URL is invalid or Redis is unreachable.
    pub async fn connect(redis_url: &str, pool_size: usize) -> Result<Self> {
        let config = Config::from_url(redis_url).map_err(map_fred_error)?;
        let pool = Builder::from_config(config)
            .build_pool(pool_size)
            .map_err(map_fred_error)?;
        pool.init().await.map_err(|e| {
            SessionError::ConnectionFailed(format!("Failed to connect to Redis: {}", e))
        })?;

        tracing::info!(pool_size, "Connected session store to Redis");

        Ok(Self::new(pool))
    }

    fn session_key(id: &SessionId) -> String {
        format!("session:{}", id)
    }
}

/// Classifies fred errors: I/O and timeouts mean the store is unavailable.
fn map_fred_error(e: RedisError) -> SessionError {
    match e.kind() {
        ErrorKind::IO | ErrorKind::Timeout | ErrorKind::Canceled | ErrorKind::Config => {
            SessionError::ConnectionFailed(e.to_string())
        }
        _ => SessionError::Storage(e.to_string()),
    }
}

#[async_trait]
impl SessionRepository for RedisSessionStore {
    async fn load(&self, id: &SessionId) -> Result<Option<Session>> {
        let key = Self::session_key(id);
        let value: Option<String> = self.pool.get(&key).await.map_err(map_fred_error)?;

        match value {
            Some(json) => {
                let session: Session = serde_json::from_str(&json)
                    .map_err(|e| SessionError::Serialization(e.to_string()))?;
                Ok(Some(session))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, session: &Session) -> Result<()> {
        let key = Self::session_key(&session.id);
        let value =
            serde_json::to_string(session).map_err(|e| SessionError::Serialization(e.to_string()))?;

        let ttl_secs = (session.expires_at - Utc::now()).num_seconds().max(1);

        self.pool
            .set::<(), _, _>(&key, value, Some(Expiration::EX(ttl_secs)), None, false)
            .await
            .map_err(map_fred_error)?;

        tracing::debug!(session_id = %session.id, ttl_secs, "Saved session");
        Ok(())
    }

    async fn delete(&self, id: &SessionId) -> Result<()> {
        let key = Self::session_key(id);
        self.pool.del::<(), _>(&key).await.map_err(map_fred_error)?;
        Ok(())
    }
}
