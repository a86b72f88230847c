//! Shared state for session handling.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use showcase_core::session::{touch_session, Session, SessionRepository};

use crate::config::SessionConfig;
use crate::error::SessionHttpError;

/// Session store plus the configuration needed to issue cookies.
#[derive(Clone)]
pub struct SessionState {
    pub store: Arc<dyn SessionRepository>,
    pub config: SessionConfig,
}

impl SessionState {
    pub fn new(store: Arc<dyn SessionRepository>, config: SessionConfig) -> Self {
        Self { store, config }
    }

    /// Persists the session and returns `jar` with the session cookie set.
    ///
    /// Saving also slides the session's expiry forward by the configured TTL.
    pub async fn commit(
        &self,
        mut session: Session,
        jar: CookieJar,
    ) -> Result<CookieJar, SessionHttpError> {
        touch_session(&mut session, Utc::now(), self.config.ttl());
        self.store.save(&session).await?;

        let cookie = Cookie::build((self.config.cookie_name.clone(), session.id.to_string()))
            .path("/")
            .http_only(true)
            .secure(self.config.cookie_secure)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::seconds(
                self.config.session_ttl.as_secs() as i64
            ))
            .build();

        Ok(jar.add(cookie))
    }
}

/// Allows SessionState to be extracted from a parent state.
impl<S> FromRef<S> for SessionState
where
    S: AsRef<SessionState>,
{
    fn from_ref(state: &S) -> Self {
        state.as_ref().clone()
    }
}
