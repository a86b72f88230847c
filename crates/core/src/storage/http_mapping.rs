//! HTTP status code mapping for repository errors.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// Stored data that fails to parse is a server-side fault, so only an
/// unreachable store is distinguished from a generic 500.
///
/// ```
/// use showcase_core::storage::{repository_error_to_status_code, RepositoryError};
///
/// let error = RepositoryError::ConnectionFailed("refused".to_string());
/// assert_eq!(repository_error_to_status_code(&error), 503);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_)
        | RepositoryError::Serialization(_)
        | RepositoryError::InvalidData(_) => 500,
    }
}
