use std::time::Duration;

use async_trait::async_trait;

use showcase_core::orders::{Order, OrderId, OrderLookup};
use showcase_core::storage::Result;

/// Lookup that sleeps before answering with an empty order placed now.
#[derive(Debug, Clone)]
pub struct SlowOrderLookup {
    delay: Duration,
}

impl SlowOrderLookup {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl OrderLookup for SlowOrderLookup {
    async fn by_id(&self, id: OrderId) -> Result<Order> {
        tracing::debug!(order_id = %id, delay_ms = self.delay.as_millis() as u64, "Slow order lookup");
        tokio::time::sleep(self.delay).await;
        Ok(Order::placed_now(id))
    }
}
