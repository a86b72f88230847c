mod error;
mod ids;
mod lookup;
mod types;

pub use error::{OrderError, Result};
pub use ids::{sequence_key, IdGenerator, LINE_ITEMS_KEYSPACE, ORDERS_KEYSPACE};
pub use lookup::OrderLookup;
pub use types::{EntityId, LineItem, LineItemId, Order, OrderId, ShoppingCart};
