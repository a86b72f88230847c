use crate::orders::EntityId;

/// Indexed field of orders.
pub const ORDER_WHEN_FIELD: &str = "when";

/// Indexed field of line items.
pub const LINE_ITEM_ORDER_ID_FIELD: &str = "orderId";

/// Returns the key of the hash holding one entity (e.g. `orders:42`).
pub fn entity_key(keyspace: &str, id: EntityId) -> String {
    format!("{}:{}", keyspace, id)
}

/// Returns the key of the secondary index set for a field value
/// (e.g. `orders:when:1718447400000`).
pub fn index_key(keyspace: &str, field: &str, value: &str) -> String {
    format!("{}:{}:{}", keyspace, field, value)
}

/// Returns the key of the set listing every index an entity currently belongs to.
///
/// Used on upsert and delete to drop stale index memberships.
pub fn index_tracking_key(keyspace: &str, id: EntityId) -> String {
    format!("{}:{}:idx", keyspace, id)
}

/// Returns the reference stored in a parent hash for a referenced entity.
pub fn reference(keyspace: &str, id: EntityId) -> String {
    entity_key(keyspace, id)
}

/// Parses a reference of the form `{keyspace}:{id}`.
///
/// Returns `None` if the keyspace differs or the id is not a valid identifier.
///
/// # Examples
///
/// ```
/// use showcase_core::storage::parse_reference;
///
/// let id = parse_reference("lineItems", "lineItems:7").unwrap();
/// assert_eq!(id.get(), 7);
///
/// assert!(parse_reference("lineItems", "orders:7").is_none());
/// ```
pub fn parse_reference(keyspace: &str, value: &str) -> Option<EntityId> {
    let rest = value.strip_prefix(keyspace)?.strip_prefix(':')?;
    rest.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::{LINE_ITEMS_KEYSPACE, ORDERS_KEYSPACE};

    fn id(value: u64) -> EntityId {
        EntityId::try_from(value).unwrap()
    }

    #[test]
    fn test_entity_key() {
        assert_eq!(entity_key(ORDERS_KEYSPACE, id(42)), "orders:42");
        assert_eq!(entity_key(LINE_ITEMS_KEYSPACE, id(3)), "lineItems:3");
    }

    #[test]
    fn test_index_key() {
        assert_eq!(
            index_key(ORDERS_KEYSPACE, ORDER_WHEN_FIELD, "1718447400000"),
            "orders:when:1718447400000"
        );
        assert_eq!(
            index_key(LINE_ITEMS_KEYSPACE, LINE_ITEM_ORDER_ID_FIELD, "9"),
            "lineItems:orderId:9"
        );
    }

    #[test]
    fn test_index_tracking_key() {
        assert_eq!(index_tracking_key(ORDERS_KEYSPACE, id(5)), "orders:5:idx");
    }

    #[test]
    fn test_reference_roundtrip() {
        let value = reference(LINE_ITEMS_KEYSPACE, id(11));
        assert_eq!(value, "lineItems:11");
        assert_eq!(parse_reference(LINE_ITEMS_KEYSPACE, &value), Some(id(11)));
    }

    #[test]
    fn test_parse_reference_rejects_malformed() {
        assert_eq!(parse_reference(LINE_ITEMS_KEYSPACE, "lineItems:"), None);
        assert_eq!(parse_reference(LINE_ITEMS_KEYSPACE, "lineItems:0"), None);
        assert_eq!(parse_reference(LINE_ITEMS_KEYSPACE, "lineItems42"), None);
        assert_eq!(parse_reference(LINE_ITEMS_KEYSPACE, "lineItemsX:4"), None);
    }
}
