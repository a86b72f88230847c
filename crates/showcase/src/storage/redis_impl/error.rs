//! Redis error mapping for repositories and id sequences.

use showcase_core::orders::OrderError;
use showcase_core::storage::RepositoryError;

fn is_connection_error(err: &redis::RedisError) -> bool {
    err.is_connection_refusal() || err.is_timeout() || err.is_connection_dropped()
}

/// Maps Redis errors to RepositoryError.
pub fn map_redis_error(err: redis::RedisError) -> RepositoryError {
    if is_connection_error(&err) {
        RepositoryError::ConnectionFailed(err.to_string())
    } else {
        RepositoryError::QueryFailed(err.to_string())
    }
}

/// Maps Redis errors raised while advancing an id sequence.
pub fn map_sequence_error(err: redis::RedisError) -> OrderError {
    OrderError::IdGeneration(err.to_string())
}
