//! In-memory session storage for development and tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use showcase_core::session::{is_session_expired, Result, Session, SessionId, SessionRepository};

/// In-memory session store.
///
/// Sessions live in a HashMap wrapped in `Arc<RwLock<_>>`; clones share the
/// same map. Expired sessions are dropped when they are next loaded.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl MemorySessionStore {
    /// Creates a new empty in-memory session store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for MemorySessionStore {
    async fn load(&self, id: &SessionId) -> Result<Option<Session>> {
        let mut sessions = self.sessions.write().await;
        match sessions.get(id.as_str()) {
            Some(session) if is_session_expired(session, Utc::now()) => {
                sessions.remove(id.as_str());
                Ok(None)
            }
            Some(session) => Ok(Some(session.clone())),
            None => Ok(None),
        }
    }

    async fn save(&self, session: &Session) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.as_str().to_string(), session.clone());
        Ok(())
    }

    async fn delete(&self, id: &SessionId) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(id.as_str());
        Ok(())
    }
}
