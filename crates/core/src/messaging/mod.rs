mod error;
mod traits;
mod types;

pub use error::{MessagingError, Result};
pub use traits::{MessageListener, PubSub};
pub use types::{greeting, ChannelMessage, CHAT_CHANNEL};
