//! In-memory pub/sub implementation.
//!
//! Pattern subscriptions are tokio broadcast channels; publishing fans a
//! message out to every subscription whose pattern matches the channel.
//! A pattern whose receivers have all been dropped is removed on the next
//! publish or subscribe.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{broadcast, RwLock};

use showcase_core::messaging::{ChannelMessage, PubSub, Result};
use showcase_core::patterns::pattern_matches;

/// Channel capacity for pub/sub messages.
const CHANNEL_CAPACITY: usize = 100;

/// In-memory pub/sub implementation.
#[derive(Debug, Clone, Default)]
pub struct MemoryPubSub {
    /// pattern -> sender shared by every subscriber of that pattern.
    patterns: Arc<RwLock<HashMap<String, broadcast::Sender<ChannelMessage>>>>,
}

impl MemoryPubSub {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    async fn pattern_count(&self) -> usize {
        self.patterns.read().await.len()
    }
}

fn prune(patterns: &mut HashMap<String, broadcast::Sender<ChannelMessage>>) {
    patterns.retain(|pattern, sender| {
        let alive = sender.receiver_count() > 0;
        if !alive {
            tracing::trace!(%pattern, "Dropping pattern without subscribers");
        }
        alive
    });
}

#[async_trait]
impl PubSub for MemoryPubSub {
    async fn publish(&self, channel: &str, payload: &str) -> Result<usize> {
        let mut patterns = self.patterns.write().await;
        prune(&mut patterns);

        let mut receivers = 0;
        for (pattern, sender) in patterns.iter() {
            if !pattern_matches(pattern, channel) {
                continue;
            }
            let message = ChannelMessage {
                pattern: pattern.clone(),
                channel: channel.to_string(),
                payload: payload.to_string(),
            };
            receivers += sender.send(message).unwrap_or(0);
        }

        tracing::trace!(channel, receivers, "Published message");
        Ok(receivers)
    }

    async fn psubscribe(&self, pattern: &str) -> Result<broadcast::Receiver<ChannelMessage>> {
        let mut patterns = self.patterns.write().await;
        prune(&mut patterns);

        let sender = patterns
            .entry(pattern.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0);
        Ok(sender.subscribe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::messaging::CHAT_CHANNEL;

    #[tokio::test]
    async fn test_publish_and_psubscribe() {
        let pubsub = MemoryPubSub::new();
        let mut receiver = pubsub.psubscribe(CHAT_CHANNEL).await.unwrap();

        let receivers = pubsub.publish(CHAT_CHANNEL, "Hello World").await.unwrap();
        assert_eq!(receivers, 1);

        let message = receiver.recv().await.unwrap();
        assert_eq!(message.channel, "chat");
        assert_eq!(message.pattern, "chat");
        assert_eq!(message.payload, "Hello World");
    }

    #[tokio::test]
    async fn test_publish_without_subscribers() {
        let pubsub = MemoryPubSub::new();

        let receivers = pubsub.publish(CHAT_CHANNEL, "nobody listens").await.unwrap();
        assert_eq!(receivers, 0);
    }

    #[tokio::test]
    async fn test_glob_pattern_matches_channels() {
        let pubsub = MemoryPubSub::new();
        let mut receiver = pubsub.psubscribe("ch?t*").await.unwrap();

        pubsub.publish("chat", "one").await.unwrap();
        pubsub.publish("news", "skipped").await.unwrap();
        pubsub.publish("chatter", "two").await.unwrap();

        assert_eq!(receiver.recv().await.unwrap().payload, "one");
        let second = receiver.recv().await.unwrap();
        assert_eq!(second.channel, "chatter");
        assert_eq!(second.pattern, "ch?t*");
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_overlapping_patterns_each_receive() {
        let pubsub = MemoryPubSub::new();
        let mut exact = pubsub.psubscribe("chat").await.unwrap();
        let mut wildcard = pubsub.psubscribe("*").await.unwrap();

        let receivers = pubsub.publish("chat", "hi").await.unwrap();

        assert_eq!(receivers, 2);
        assert_eq!(exact.recv().await.unwrap().payload, "hi");
        assert_eq!(wildcard.recv().await.unwrap().pattern, "*");
    }

    #[tokio::test]
    async fn test_multiple_subscribers_same_pattern() {
        let pubsub = MemoryPubSub::new();
        let mut first = pubsub.psubscribe("chat").await.unwrap();
        let mut second = pubsub.psubscribe("chat").await.unwrap();

        assert_eq!(pubsub.publish("chat", "both").await.unwrap(), 2);
        assert_eq!(first.recv().await.unwrap().payload, "both");
        assert_eq!(second.recv().await.unwrap().payload, "both");
    }

    #[tokio::test]
    async fn test_dropped_subscription_is_pruned() {
        let pubsub = MemoryPubSub::new();
        let receiver = pubsub.psubscribe("chat").await.unwrap();
        let _news = pubsub.psubscribe("news").await.unwrap();
        assert_eq!(pubsub.pattern_count().await, 2);

        drop(receiver);

        assert_eq!(pubsub.publish("chat", "gone").await.unwrap(), 0);
        assert_eq!(pubsub.pattern_count().await, 1);
    }

    #[tokio::test]
    async fn test_resubscribe_after_drop_receives() {
        let pubsub = MemoryPubSub::new();
        drop(pubsub.psubscribe("chat").await.unwrap());

        let mut receiver = pubsub.psubscribe("chat").await.unwrap();

        assert_eq!(pubsub.pattern_count().await, 1);
        assert_eq!(pubsub.publish("chat", "back").await.unwrap(), 1);
        assert_eq!(receiver.recv().await.unwrap().payload, "back");
    }
}
