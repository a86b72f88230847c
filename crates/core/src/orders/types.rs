use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::OrderError;

/// Numeric identifier shared by orders and line items.
///
/// Identifiers are never zero; they come from an [`IdGenerator`](super::IdGenerator)
/// sequence rather than from random numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(NonZeroU64);

impl EntityId {
    /// Returns the raw numeric value.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for EntityId {
    type Error = OrderError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        NonZeroU64::new(value)
            .map(Self)
            .ok_or(OrderError::InvalidId(value.to_string()))
    }
}

impl FromStr for EntityId {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = s
            .parse()
            .map_err(|_| OrderError::InvalidId(s.to_string()))?;
        Self::try_from(value)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub type OrderId = EntityId;
pub type LineItemId = EntityId;

/// A single line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: LineItemId,
    /// Owning order. Not enforced: nothing checks the order exists.
    pub order_id: OrderId,
    pub description: String,
}

impl LineItem {
    pub fn new(order_id: OrderId, id: LineItemId, description: impl Into<String>) -> Self {
        Self {
            id,
            order_id,
            description: description.into(),
        }
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LineItem(id={}, orderId={}, description={})",
            self.id, self.order_id, self.description
        )
    }
}

/// An order with its line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// When the order was placed, at millisecond precision.
    pub when: DateTime<Utc>,
    pub line_items: Vec<LineItem>,
}

impl Order {
    /// Creates an order. `when` is truncated to milliseconds so it survives the
    /// epoch-millis encoding used by the `when` index.
    pub fn new(id: OrderId, when: DateTime<Utc>, line_items: Vec<LineItem>) -> Self {
        Self {
            id,
            when: when.trunc_subsecs(3),
            line_items,
        }
    }

    /// Creates an empty order placed now.
    pub fn placed_now(id: OrderId) -> Self {
        Self::new(id, Utc::now(), Vec::new())
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.line_items.iter().map(ToString::to_string).collect();
        write!(
            f,
            "Order(id={}, when={}, lineItems=[{}])",
            self.id,
            self.when.to_rfc3339(),
            items.join(", ")
        )
    }
}

/// Session-scoped, append-only list of orders.
///
/// Lives inside an HTTP session; never written to the order keyspaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingCart {
    orders: Vec<Order>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn id(value: u64) -> EntityId {
        EntityId::try_from(value).unwrap()
    }

    #[test]
    fn test_entity_id_rejects_zero() {
        assert!(matches!(
            EntityId::try_from(0),
            Err(OrderError::InvalidId(_))
        ));
        assert_eq!(id(7).get(), 7);
    }

    #[test]
    fn test_entity_id_from_str() {
        assert_eq!("42".parse::<EntityId>().unwrap(), id(42));
        assert!("abc".parse::<EntityId>().is_err());
        assert!("0".parse::<EntityId>().is_err());
        assert!("-3".parse::<EntityId>().is_err());
    }

    #[test]
    fn test_entity_id_serializes_as_number() {
        let json = serde_json::to_string(&id(5)).unwrap();
        assert_eq!(json, "5");
    }

    #[test]
    fn test_order_truncates_when_to_millis() {
        let when = Utc
            .with_ymd_and_hms(2024, 6, 15, 10, 30, 0)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();
        let order = Order::new(id(1), when, Vec::new());

        assert_eq!(order.when.nanosecond(), 123_000_000);
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let order = Order::new(
            id(1),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            vec![LineItem::new(id(1), id(2), "soup")],
        );
        let value = serde_json::to_value(&order).unwrap();

        assert!(value.get("lineItems").is_some());
        assert_eq!(value["lineItems"][0]["orderId"], 1);
    }

    #[test]
    fn test_shopping_cart_appends_in_order() {
        let mut cart = ShoppingCart::new();
        assert!(cart.is_empty());

        cart.add_order(Order::placed_now(id(1)));
        cart.add_order(Order::placed_now(id(2)));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.orders()[0].id, id(1));
        assert_eq!(cart.orders()[1].id, id(2));
    }

    #[test]
    fn test_line_item_display() {
        let item = LineItem::new(id(3), id(9), "coffee");
        assert_eq!(
            item.to_string(),
            "LineItem(id=9, orderId=3, description=coffee)"
        );
    }
}
