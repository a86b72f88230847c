use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use showcase_core::session::{session_error_to_status_code, SessionError};
use thiserror::Error;

/// Session errors surfaced to HTTP handlers.
///
/// Wraps the core `SessionError` so it can be returned from handlers and
/// extractors.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct SessionHttpError(#[from] pub SessionError);

impl IntoResponse for SessionHttpError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(session_error_to_status_code(&self.0))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        tracing::error!(error = %self.0, "Session error");

        let message = if status == StatusCode::SERVICE_UNAVAILABLE {
            "Session store unavailable"
        } else {
            "Internal server error"
        };

        (status, message).into_response()
    }
}
