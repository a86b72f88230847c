//! Pure functions for serializing/deserializing domain types to/from cache bytes.
//!
//! These functions use JSON serialization for cache storage, providing human-readable
//! cache values that are easy to debug and inspect.

use crate::orders::Order;
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes an order to JSON bytes.
pub fn serialize_order(order: &Order) -> Result<Vec<u8>> {
    serde_json::to_vec(order).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to an order.
pub fn deserialize_order(bytes: &[u8]) -> Result<Order> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::{EntityId, LineItem};
    use chrono::{TimeZone, Utc};

    fn id(value: u64) -> EntityId {
        EntityId::try_from(value).unwrap()
    }

    #[test]
    fn test_roundtrip_order_with_items() {
        let order = Order::new(
            id(1),
            Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap(),
            vec![LineItem::new(id(1), id(2), "plunger")],
        );

        let bytes = serialize_order(&order).expect("serialize should succeed");
        let deserialized = deserialize_order(&bytes).expect("deserialize should succeed");

        assert_eq!(order, deserialized);
    }

    #[test]
    fn test_deserialize_order_malformed_bytes() {
        let result = deserialize_order(b"not valid json");

        assert!(matches!(
            result.unwrap_err(),
            SerializationError::DeserializeFailed(_)
        ));
    }

    #[test]
    fn test_deserialize_order_rejects_zero_id() {
        let result = deserialize_order(br#"{"id":0,"when":"2024-01-01T00:00:00Z","lineItems":[]}"#);

        assert!(result.is_err());
    }
}
