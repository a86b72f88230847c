use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use showcase_core::session::{session_error_to_status_code, SessionError};
use showcase_core::storage::{repository_error_to_status_code, RepositoryError};
use showcase_session::SessionHttpError;

pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(repo_error)
        } else if let Some(session_error) = self.0.downcast_ref::<SessionError>() {
            session_error_to_status_code(session_error)
        } else if let Some(http_error) = self.0.downcast_ref::<SessionHttpError>() {
            session_error_to_status_code(&http_error.0)
        } else {
            500
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        tracing::error!(status = status_code.as_u16(), error = %self.0, "Request failed");
        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
