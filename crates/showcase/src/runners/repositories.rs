use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use showcase_core::orders::{IdGenerator, LineItem, Order, LINE_ITEMS_KEYSPACE, ORDERS_KEYSPACE};
use showcase_core::storage::{LineItemRepository, OrderRepository};

use super::Runner;

const DESCRIPTIONS: [&str; 3] = ["plunger", "soup", "coffee"];

/// Saves an order with three line items, then finds it through the `when` index.
pub struct RepositoriesRunner {
    orders: Arc<dyn OrderRepository>,
    line_items: Arc<dyn LineItemRepository>,
    ids: Arc<dyn IdGenerator>,
}

impl RepositoriesRunner {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        line_items: Arc<dyn LineItemRepository>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            orders,
            line_items,
            ids,
        }
    }
}

#[async_trait]
impl Runner for RepositoriesRunner {
    fn title(&self) -> &str {
        "repositories"
    }

    async fn run(&self) -> anyhow::Result<()> {
        let order_id = self.ids.next_id(ORDERS_KEYSPACE).await?;

        let mut items = Vec::with_capacity(DESCRIPTIONS.len());
        for description in DESCRIPTIONS {
            let item = LineItem::new(order_id, self.ids.next_id(LINE_ITEMS_KEYSPACE).await?, description);
            self.line_items.save_line_item(&item).await?;
            tracing::info!("Saved {}", item);
            items.push(item);
        }

        let order = Order::new(order_id, Utc::now(), items);
        self.orders.save_order(&order).await?;

        for found in self.orders.find_orders_by_when(order.when).await? {
            tracing::info!("Found {}", found);
        }

        Ok(())
    }
}
