//! Axum extractor for the caller's HTTP session.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use showcase_core::session::{
    is_session_expired, is_valid_session_id, new_session, Session, SessionId,
};

use crate::error::SessionHttpError;
use crate::SessionState;

/// The caller's session: the one named by the session cookie if it is still
/// live, otherwise a fresh, empty one.
///
/// Changes are only persisted through [`SessionState::commit`].
pub struct HttpSession {
    session: Session,
    jar: CookieJar,
    is_new: bool,
}

impl HttpSession {
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Whether the session was created by this request.
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Splits into the session and the request's cookie jar, ready for
    /// [`SessionState::commit`].
    pub fn into_parts(self) -> (Session, CookieJar) {
        (self.session, self.jar)
    }
}

impl<S> FromRequestParts<S> for HttpSession
where
    SessionState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = SessionHttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session_state = SessionState::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        let now = Utc::now();

        let session_id = jar
            .get(&session_state.config.cookie_name)
            .map(|cookie| cookie.value())
            .filter(|value| is_valid_session_id(value))
            .map(|value| SessionId::new(value.to_string()));

        let existing = match session_id {
            Some(id) => session_state.store.load(&id).await?,
            None => None,
        };

        match existing {
            Some(session) if !is_session_expired(&session, now) => Ok(Self {
                session,
                jar,
                is_new: false,
            }),
            _ => {
                let session = new_session(now, session_state.config.ttl());
                tracing::debug!(session_id = %session.id, "Starting new session");
                Ok(Self {
                    session,
                    jar,
                    is_new: true,
                })
            }
        }
    }
}
