//! Background listeners for pattern subscriptions.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use showcase_core::messaging::{ChannelMessage, MessageListener, PubSub, Result};

/// Pause before subscribing again after a subscription closed.
const RESUBSCRIBE_DELAY: Duration = Duration::from_millis(500);

/// Logs every message it receives.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingListener;

#[async_trait]
impl MessageListener for LoggingListener {
    async fn on_message(&self, message: &ChannelMessage) {
        tracing::info!("Message from '{}' : {}", message.channel, message.payload);
    }
}

/// Runs one background task per registered `(pattern, listener)` pair.
///
/// A subscription that closes underneath a task (for example because the
/// Redis connection dropped) is re-established until the shutdown channel
/// fires, which stops every task.
pub struct ListenerContainer {
    pubsub: Arc<dyn PubSub>,
    shutdown_tx: broadcast::Sender<()>,
}

impl ListenerContainer {
    pub fn new(pubsub: Arc<dyn PubSub>, shutdown_tx: broadcast::Sender<()>) -> Self {
        Self {
            pubsub,
            shutdown_tx,
        }
    }

    /// Subscribes to `pattern` and hands each message to `listener`.
    ///
    /// The subscription is active once this returns.
    pub async fn add_listener(
        &self,
        pattern: &str,
        listener: Arc<dyn MessageListener>,
    ) -> Result<JoinHandle<()>> {
        let mut receiver = self.pubsub.psubscribe(pattern).await?;
        let mut shutdown_rx = self.shutdown_tx.subscribe();
        let pubsub = self.pubsub.clone();
        let pattern = pattern.to_string();

        tracing::debug!(%pattern, "Message listener started");

        Ok(tokio::spawn(async move {
            loop {
                let closed = tokio::select! {
                    result = receiver.recv() => {
                        match result {
                            Ok(message) => {
                                listener.on_message(&message).await;
                                false
                            }
                            Err(broadcast::error::RecvError::Lagged(n)) => {
                                tracing::warn!(%pattern, lagged = n, "Message listener lagged");
                                false
                            }
                            Err(broadcast::error::RecvError::Closed) => true,
                        }
                    }
                    _ = shutdown_rx.recv() => {
                        tracing::debug!(%pattern, "Message listener shutting down");
                        break;
                    }
                };

                if !closed {
                    continue;
                }

                tracing::warn!(%pattern, "Subscription closed, resubscribing");
                match resubscribe(pubsub.as_ref(), &pattern, &mut shutdown_rx).await {
                    Some(next) => receiver = next,
                    None => {
                        tracing::debug!(%pattern, "Message listener shutting down");
                        break;
                    }
                }
            }
        }))
    }
}

/// Retries `psubscribe` every [`RESUBSCRIBE_DELAY`] until it succeeds.
///
/// Returns `None` when shutdown is signalled first.
async fn resubscribe(
    pubsub: &dyn PubSub,
    pattern: &str,
    shutdown_rx: &mut broadcast::Receiver<()>,
) -> Option<broadcast::Receiver<ChannelMessage>> {
    loop {
        tokio::select! {
            _ = tokio::time::sleep(RESUBSCRIBE_DELAY) => {}
            _ = shutdown_rx.recv() => return None,
        }

        match pubsub.psubscribe(pattern).await {
            Ok(receiver) => {
                tracing::info!(%pattern, "Resubscribed");
                return Some(receiver);
            }
            Err(err) => {
                tracing::warn!(%pattern, error = %err, "Resubscribe failed");
            }
        }
    }
}
