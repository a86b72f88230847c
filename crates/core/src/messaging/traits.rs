use async_trait::async_trait;
use tokio::sync::broadcast;

use super::{ChannelMessage, Result};

/// Publish/subscribe over named channels.
#[async_trait]
pub trait PubSub: Send + Sync {
    /// Publishes a message and returns how many subscribers received it.
    ///
    /// Fire-and-forget: a message with no subscribers is dropped.
    async fn publish(&self, channel: &str, payload: &str) -> Result<usize>;

    /// Subscribes to every channel matching a glob pattern.
    async fn psubscribe(&self, pattern: &str) -> Result<broadcast::Receiver<ChannelMessage>>;
}

/// Handler invoked for each message received by a subscription.
#[async_trait]
pub trait MessageListener: Send + Sync {
    async fn on_message(&self, message: &ChannelMessage);
}
