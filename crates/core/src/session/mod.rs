mod error;
mod functions;
mod traits;
mod types;

pub use error::{session_error_to_status_code, SessionError};
pub use functions::{
    calculate_expiry, generate_session_id, is_session_expired, is_valid_session_id, new_session,
    touch_session, SESSION_ID_LENGTH,
};
pub use traits::{Result, SessionRepository};
pub use types::{Session, SessionId};
