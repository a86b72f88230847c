//! Redis pub/sub implementation.
//!
//! Every `psubscribe` opens its own pub/sub connection; a background task
//! forwards its messages into a broadcast channel until every receiver is
//! dropped.

use async_trait::async_trait;
use futures_util::StreamExt;
use redis::AsyncCommands;
use tokio::sync::broadcast;

use showcase_core::messaging::{ChannelMessage, MessagingError, PubSub, Result};

/// Channel capacity for forwarded messages.
const CHANNEL_CAPACITY: usize = 100;

/// Redis pub/sub backend.
pub struct RedisPubSub {
    client: redis::Client,
}

/// Maps Redis errors, keeping connection failures distinguishable.
fn map_redis_error(err: redis::RedisError, otherwise: fn(String) -> MessagingError) -> MessagingError {
    if err.is_connection_refusal() || err.is_timeout() || err.is_connection_dropped() {
        MessagingError::ConnectionFailed(err.to_string())
    } else {
        otherwise(err.to_string())
    }
}

impl RedisPubSub {
    /// Creates a pub/sub backend, checking that Redis is reachable.
    ///
    /// # Errors
    ///
    /// Returns `MessagingError::ConnectionFailed` if the connection cannot be established.
    pub async fn new(client: redis::Client) -> Result<Self> {
        let _ = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| MessagingError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client })
    }

    /// Opens a client for `url` and creates the backend.
    pub async fn connect(url: &str) -> Result<Self> {
        let client =
            redis::Client::open(url).map_err(|e| MessagingError::ConnectionFailed(e.to_string()))?;
        Self::new(client).await
    }
}

#[async_trait]
impl PubSub for RedisPubSub {
    async fn publish(&self, channel: &str, payload: &str) -> Result<usize> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| map_redis_error(e, MessagingError::PublishFailed))?;

        let receivers: usize = conn
            .publish(channel, payload)
            .await
            .map_err(|e| map_redis_error(e, MessagingError::PublishFailed))?;

        tracing::trace!(channel, receivers, "Published message");
        Ok(receivers)
    }

    async fn psubscribe(&self, pattern: &str) -> Result<broadcast::Receiver<ChannelMessage>> {
        let mut pubsub = self
            .client
            .get_async_pubsub()
            .await
            .map_err(|e| map_redis_error(e, MessagingError::SubscribeFailed))?;

        // Subscribe before returning so that nothing published afterwards is missed.
        pubsub
            .psubscribe(pattern)
            .await
            .map_err(|e| map_redis_error(e, MessagingError::SubscribeFailed))?;

        let (tx, rx) = broadcast::channel(CHANNEL_CAPACITY);
        let pattern = pattern.to_string();
        tracing::debug!(%pattern, "Subscribed to pattern");

        tokio::spawn(async move {
            let mut stream = pubsub.into_on_message();

            loop {
                let Some(msg) = stream.next().await else {
                    tracing::warn!(%pattern, "Redis subscription connection closed");
                    break;
                };

                let payload: String = match msg.get_payload() {
                    Ok(payload) => payload,
                    Err(e) => {
                        tracing::warn!(%pattern, error = %e, "Dropping non-UTF-8 message");
                        continue;
                    }
                };

                let message = ChannelMessage {
                    pattern: msg.get_pattern().unwrap_or_else(|_| pattern.clone()),
                    channel: msg.get_channel_name().to_string(),
                    payload,
                };

                if tx.send(message).is_err() {
                    tracing::debug!(%pattern, "No receivers left, closing subscription");
                    break;
                }
            }
        });

        Ok(rx)
    }
}
