//! Liveness probe.

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately, whether or not the startup runners have finished.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
