use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::orders::{LineItem, LineItemId, Order, OrderId};

use super::Result;

/// Repository for line items.
#[async_trait]
pub trait LineItemRepository: Send + Sync {
    /// Inserts or replaces a line item by its ID.
    async fn save_line_item(&self, item: &LineItem) -> Result<()>;

    /// Gets a line item by its ID.
    async fn get_line_item(&self, id: LineItemId) -> Result<Option<LineItem>>;

    /// Gets all line items that reference the given order.
    async fn find_line_items_by_order_id(&self, order_id: OrderId) -> Result<Vec<LineItem>>;

    /// Deletes a line item. Deleting a missing item is a no-op.
    async fn delete_line_item(&self, id: LineItemId) -> Result<()>;
}

/// Repository for orders.
///
/// Orders store references to their line items; the items themselves must be
/// saved through a [`LineItemRepository`].
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Inserts or replaces an order by its ID.
    async fn save_order(&self, order: &Order) -> Result<()>;

    /// Gets an order by its ID with its referenced line items resolved.
    async fn get_order(&self, id: OrderId) -> Result<Option<Order>>;

    /// Gets all orders placed at exactly the given instant (millisecond precision).
    async fn find_orders_by_when(&self, when: DateTime<Utc>) -> Result<Vec<Order>>;

    /// Deletes an order. Its line items are left untouched.
    async fn delete_order(&self, id: OrderId) -> Result<()>;

    /// Returns the number of stored orders.
    async fn count_orders(&self) -> Result<usize>;
}
