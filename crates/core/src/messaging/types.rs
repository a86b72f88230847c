use chrono::{DateTime, Utc};

/// Channel the demo publishes on and listens to.
pub const CHAT_CHANNEL: &str = "chat";

/// A message delivered to a pattern subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMessage {
    /// The pattern the subscription was registered with.
    pub pattern: String,
    /// The channel the message was published on.
    pub channel: String,
    pub payload: String,
}

/// Builds the demo greeting published on [`CHAT_CHANNEL`].
pub fn greeting(now: DateTime<Utc>) -> String {
    format!("Hello World @{}", now.to_rfc3339())
}
