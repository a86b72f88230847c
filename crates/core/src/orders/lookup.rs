use async_trait::async_trait;

use crate::storage::Result;

use super::{Order, OrderId};

/// Looks up a single order by ID.
///
/// The cache-aside decorator and the slow lookup it wraps both implement this.
#[async_trait]
pub trait OrderLookup: Send + Sync {
    async fn by_id(&self, id: OrderId) -> Result<Order>;
}
