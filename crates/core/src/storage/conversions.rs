//! Hash conversion functions.
//!
//! Pure functions for converting between Redis hash fields and domain types.
//! Orders keep references (`lineItems.[i] = lineItems:{id}`) instead of
//! embedding their line items; resolving them is the repository's job.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::orders::{EntityId, LineItem, LineItemId, Order, OrderId, LINE_ITEMS_KEYSPACE, ORDERS_KEYSPACE};

use super::keys::{index_key, parse_reference, reference, LINE_ITEM_ORDER_ID_FIELD, ORDER_WHEN_FIELD};
use super::RepositoryError;

const LINE_ITEMS_FIELD_PREFIX: &str = "lineItems.[";

/// An order as stored: its own fields plus unresolved line item references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub id: OrderId,
    pub when: DateTime<Utc>,
    /// Referenced line item IDs in their stored order.
    pub line_item_ids: Vec<LineItemId>,
}

impl From<&Order> for OrderRecord {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            when: order.when,
            line_item_ids: order.line_items.iter().map(|item| item.id).collect(),
        }
    }
}

impl OrderRecord {
    /// Builds the order from already resolved line items.
    pub fn into_order(self, line_items: Vec<LineItem>) -> Order {
        Order::new(self.id, self.when, line_items)
    }
}

// ============================================================================
// Order conversions
// ============================================================================

/// Convert an Order to hash fields.
pub fn order_to_hash(order: &Order) -> Vec<(String, String)> {
    let mut fields = vec![
        ("id".to_string(), order.id.to_string()),
        (
            ORDER_WHEN_FIELD.to_string(),
            order.when.timestamp_millis().to_string(),
        ),
    ];

    for (i, item) in order.line_items.iter().enumerate() {
        fields.push((
            format!("{}{}]", LINE_ITEMS_FIELD_PREFIX, i),
            reference(LINE_ITEMS_KEYSPACE, item.id),
        ));
    }

    fields
}

/// Convert hash fields to an OrderRecord.
pub fn hash_to_order_record(
    hash: &HashMap<String, String>,
) -> Result<OrderRecord, RepositoryError> {
    let id = get_id(hash, "id")?;
    let when = get_millis(hash, ORDER_WHEN_FIELD)?;

    let mut references: Vec<(usize, LineItemId)> = Vec::new();
    for (field, value) in hash {
        let Some(position) = field
            .strip_prefix(LINE_ITEMS_FIELD_PREFIX)
            .and_then(|rest| rest.strip_suffix(']'))
        else {
            continue;
        };

        let position: usize = position.parse().map_err(|_| {
            RepositoryError::InvalidData(format!("Invalid line item position: {}", field))
        })?;
        let item_id = parse_reference(LINE_ITEMS_KEYSPACE, value).ok_or_else(|| {
            RepositoryError::InvalidData(format!("Invalid line item reference: {}", value))
        })?;
        references.push((position, item_id));
    }
    references.sort_by_key(|(position, _)| *position);

    Ok(OrderRecord {
        id,
        when,
        line_item_ids: references.into_iter().map(|(_, id)| id).collect(),
    })
}

/// Returns the secondary index sets an order belongs to.
pub fn order_index_keys(order: &Order) -> Vec<String> {
    vec![index_key(
        ORDERS_KEYSPACE,
        ORDER_WHEN_FIELD,
        &order.when.timestamp_millis().to_string(),
    )]
}

// ============================================================================
// Line item conversions
// ============================================================================

/// Convert a LineItem to hash fields.
pub fn line_item_to_hash(item: &LineItem) -> Vec<(String, String)> {
    vec![
        ("id".to_string(), item.id.to_string()),
        (
            LINE_ITEM_ORDER_ID_FIELD.to_string(),
            item.order_id.to_string(),
        ),
        ("description".to_string(), item.description.clone()),
    ]
}

/// Convert hash fields to a LineItem.
pub fn hash_to_line_item(hash: &HashMap<String, String>) -> Result<LineItem, RepositoryError> {
    Ok(LineItem {
        id: get_id(hash, "id")?,
        order_id: get_id(hash, LINE_ITEM_ORDER_ID_FIELD)?,
        description: get_string(hash, "description")?,
    })
}

/// Returns the secondary index sets a line item belongs to.
pub fn line_item_index_keys(item: &LineItem) -> Vec<String> {
    vec![index_key(
        LINE_ITEMS_KEYSPACE,
        LINE_ITEM_ORDER_ID_FIELD,
        &item.order_id.to_string(),
    )]
}

// ============================================================================
// Field helpers
// ============================================================================

fn get_string(hash: &HashMap<String, String>, field: &str) -> Result<String, RepositoryError> {
    hash.get(field)
        .cloned()
        .ok_or_else(|| RepositoryError::Serialization(format!("Missing field: {}", field)))
}

fn get_id(hash: &HashMap<String, String>, field: &str) -> Result<EntityId, RepositoryError> {
    let value = get_string(hash, field)?;
    value
        .parse()
        .map_err(|_| RepositoryError::InvalidData(format!("Invalid {}: {}", field, value)))
}

fn get_millis(
    hash: &HashMap<String, String>,
    field: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let value = get_string(hash, field)?;
    let millis: i64 = value
        .parse()
        .map_err(|_| RepositoryError::InvalidData(format!("Invalid {}: {}", field, value)))?;
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| RepositoryError::InvalidData(format!("{} out of range: {}", field, millis)))
}
