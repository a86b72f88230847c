use thiserror::Error;

/// Errors that can occur while publishing or subscribing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessagingError {
    #[error("Pub/sub connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Publish failed: {0}")]
    PublishFailed(String),
    #[error("Subscribe failed: {0}")]
    SubscribeFailed(String),
}

/// Result type for pub/sub operations.
pub type Result<T> = std::result::Result<T, MessagingError>;
