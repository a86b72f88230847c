use chrono::{DateTime, Duration, Utc};
use rand::{distr::Alphanumeric, Rng};

use super::{Session, SessionId};

/// Length of generated session identifiers.
pub const SESSION_ID_LENGTH: usize = 32;

/// Generate a cryptographically random session ID.
pub fn generate_session_id() -> SessionId {
    let id: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LENGTH)
        .map(char::from)
        .collect();
    SessionId::new(id)
}

/// Checks that a client-supplied session ID has the generated shape.
///
/// Cookie values failing this check are never looked up in the store.
pub fn is_valid_session_id(value: &str) -> bool {
    value.len() == SESSION_ID_LENGTH && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Check if a session has expired.
pub fn is_session_expired(session: &Session, now: DateTime<Utc>) -> bool {
    session.expires_at <= now
}

/// Calculate session expiry from last access time and TTL.
pub fn calculate_expiry(last_accessed_at: DateTime<Utc>, ttl: Duration) -> DateTime<Utc> {
    last_accessed_at + ttl
}

/// Create a fresh, empty session.
pub fn new_session(now: DateTime<Utc>, ttl: Duration) -> Session {
    Session::new(generate_session_id(), now, calculate_expiry(now, ttl))
}

/// Record an access, sliding the expiry window forward.
pub fn touch_session(session: &mut Session, now: DateTime<Utc>, ttl: Duration) {
    session.last_accessed_at = now;
    session.expires_at = calculate_expiry(now, ttl);
}
