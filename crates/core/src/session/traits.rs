use async_trait::async_trait;

use super::{Session, SessionError, SessionId};

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Session storage abstraction.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Retrieve a session by ID. Expired sessions may or may not be returned;
    /// callers check [`is_session_expired`](super::is_session_expired).
    async fn load(&self, id: &SessionId) -> Result<Option<Session>>;

    /// Store a session, replacing any previous version.
    ///
    /// The stored copy lives until the session's `expires_at`.
    async fn save(&self, session: &Session) -> Result<()>;

    /// Delete a session. Deleting a missing session is a no-op.
    async fn delete(&self, id: &SessionId) -> Result<()>;
}
