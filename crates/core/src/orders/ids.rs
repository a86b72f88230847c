use async_trait::async_trait;

use super::{EntityId, Result};

/// Keyspace holding order hashes.
pub const ORDERS_KEYSPACE: &str = "orders";

/// Keyspace holding line item hashes.
pub const LINE_ITEMS_KEYSPACE: &str = "lineItems";

/// Source of unique, non-zero identifiers per keyspace.
///
/// Implementations hand out a monotonically increasing sequence starting at 1,
/// so identifiers within one keyspace never collide.
#[async_trait]
pub trait IdGenerator: Send + Sync {
    /// Returns the next identifier for the given keyspace.
    async fn next_id(&self, keyspace: &str) -> Result<EntityId>;
}

/// Returns the key of the counter backing a keyspace's id sequence.
pub fn sequence_key(keyspace: &str) -> String {
    format!("{}:seq", keyspace)
}
