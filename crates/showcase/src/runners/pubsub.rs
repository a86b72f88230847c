use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use showcase_core::messaging::{greeting, PubSub, CHAT_CHANNEL};

use super::Runner;

/// Publishes a greeting on the chat channel.
pub struct PubSubRunner {
    pubsub: Arc<dyn PubSub>,
}

impl PubSubRunner {
    pub fn new(pubsub: Arc<dyn PubSub>) -> Self {
        Self { pubsub }
    }
}

#[async_trait]
impl Runner for PubSubRunner {
    fn title(&self) -> &str {
        "publish / subscribe"
    }

    async fn run(&self) -> anyhow::Result<()> {
        let message = greeting(Utc::now());
        let receivers = self.pubsub.publish(CHAT_CHANNEL, &message).await?;
        tracing::debug!(channel = CHAT_CHANNEL, receivers, "Published greeting");
        Ok(())
    }
}
