use thiserror::Error;

/// Errors raised by order identifiers and their generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Invalid identifier: {0}")]
    InvalidId(String),
    #[error("Identifier generation failed: {0}")]
    IdGeneration(String),
}

/// Result type for order operations.
pub type Result<T> = std::result::Result<T, OrderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_id_display() {
        let error = OrderError::InvalidId("0".to_string());
        assert_eq!(error.to_string(), "Invalid identifier: 0");
    }

    #[test]
    fn test_id_generation_display() {
        let error = OrderError::IdGeneration("connection refused".to_string());
        assert_eq!(
            error.to_string(),
            "Identifier generation failed: connection refused"
        );
    }
}
