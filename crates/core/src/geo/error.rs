use thiserror::Error;

/// Errors that can occur during geo index operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    #[error("Invalid coordinates: longitude {longitude}, latitude {latitude}")]
    InvalidCoordinates { longitude: f64, latitude: f64 },
    #[error("Invalid radius: {0}")]
    InvalidRadius(f64),
    #[error("Geo connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Geo operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_coordinates_display() {
        let error = GeoError::InvalidCoordinates {
            longitude: 200.0,
            latitude: 10.0,
        };
        assert_eq!(
            error.to_string(),
            "Invalid coordinates: longitude 200, latitude 10"
        );
    }

    #[test]
    fn test_invalid_radius_display() {
        assert_eq!(GeoError::InvalidRadius(-1.0).to_string(), "Invalid radius: -1");
    }
}
