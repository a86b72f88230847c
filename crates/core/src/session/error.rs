use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("session store unavailable: {0}")]
    ConnectionFailed(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("invalid session attribute {name}: {reason}")]
    Attribute { name: String, reason: String },

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Maps a [`SessionError`] to an HTTP status code.
///
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - everything else -> 500 (Internal Server Error)
pub fn session_error_to_status_code(error: &SessionError) -> u16 {
    match error {
        SessionError::ConnectionFailed(_) => 503,
        SessionError::Storage(_) | SessionError::Attribute { .. } | SessionError::Serialization(_) => {
            500
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_display() {
        let error = SessionError::Attribute {
            name: "cart".to_string(),
            reason: "expected struct".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "invalid session attribute cart: expected struct"
        );
    }

    #[test]
    fn test_connection_failed_maps_to_503() {
        let error = SessionError::ConnectionFailed("refused".to_string());
        assert_eq!(session_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_storage_maps_to_500() {
        let error = SessionError::Storage("WRONGTYPE".to_string());
        assert_eq!(session_error_to_status_code(&error), 500);
    }
}
