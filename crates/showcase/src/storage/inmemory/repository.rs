//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use showcase_core::orders::{LineItem, LineItemId, Order, OrderId};
use showcase_core::storage::{LineItemRepository, OrderRecord, OrderRepository, Result};

/// In-memory storage backend.
///
/// Orders are kept as [`OrderRecord`]s holding line item references, like the
/// Redis hashes, so reading an order resolves its items at read time.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    orders: Arc<RwLock<HashMap<OrderId, OrderRecord>>>,
    line_items: Arc<RwLock<HashMap<LineItemId, LineItem>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    async fn resolve(&self, record: OrderRecord) -> Order {
        let line_items = self.line_items.read().await;
        let items = record
            .line_item_ids
            .iter()
            .filter_map(|id| {
                let item = line_items.get(id).cloned();
                if item.is_none() {
                    tracing::warn!(order_id = %record.id, line_item_id = %id, "Dangling line item reference");
                }
                item
            })
            .collect();
        record.into_order(items)
    }
}

#[async_trait]
impl LineItemRepository for InMemoryRepository {
    async fn save_line_item(&self, item: &LineItem) -> Result<()> {
        let mut line_items = self.line_items.write().await;
        line_items.insert(item.id, item.clone());
        Ok(())
    }

    async fn get_line_item(&self, id: LineItemId) -> Result<Option<LineItem>> {
        let line_items = self.line_items.read().await;
        Ok(line_items.get(&id).cloned())
    }

    async fn find_line_items_by_order_id(&self, order_id: OrderId) -> Result<Vec<LineItem>> {
        let line_items = self.line_items.read().await;
        let mut found: Vec<LineItem> = line_items
            .values()
            .filter(|item| item.order_id == order_id)
            .cloned()
            .collect();
        found.sort_by_key(|item| item.id);
        Ok(found)
    }

    async fn delete_line_item(&self, id: LineItemId) -> Result<()> {
        let mut line_items = self.line_items.write().await;
        line_items.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for InMemoryRepository {
    async fn save_order(&self, order: &Order) -> Result<()> {
        let mut orders = self.orders.write().await;
        orders.insert(order.id, OrderRecord::from(order));
        Ok(())
    }

    async fn get_order(&self, id: OrderId) -> Result<Option<Order>> {
        let record = {
            let orders = self.orders.read().await;
            orders.get(&id).cloned()
        };
        match record {
            Some(record) => Ok(Some(self.resolve(record).await)),
            None => Ok(None),
        }
    }

    async fn find_orders_by_when(&self, when: DateTime<Utc>) -> Result<Vec<Order>> {
        let millis = when.timestamp_millis();
        let mut records: Vec<OrderRecord> = {
            let orders = self.orders.read().await;
            orders
                .values()
                .filter(|record| record.when.timestamp_millis() == millis)
                .cloned()
                .collect()
        };
        records.sort_by_key(|record| record.id);

        let mut found = Vec::with_capacity(records.len());
        for record in records {
            found.push(self.resolve(record).await);
        }
        Ok(found)
    }

    async fn delete_order(&self, id: OrderId) -> Result<()> {
        let mut orders = self.orders.write().await;
        orders.remove(&id);
        Ok(())
    }

    async fn count_orders(&self) -> Result<usize> {
        Ok(self.orders.read().await.len())
    }
}
