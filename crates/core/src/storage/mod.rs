mod conversions;
mod error;
mod http_mapping;
mod keys;
mod traits;

pub use conversions::{
    hash_to_line_item, hash_to_order_record, line_item_index_keys, line_item_to_hash,
    order_index_keys, order_to_hash, OrderRecord,
};
pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use keys::{
    entity_key, index_key, index_tracking_key, parse_reference, reference, LINE_ITEM_ORDER_ID_FIELD,
    ORDER_WHEN_FIELD,
};
pub use traits::{LineItemRepository, OrderRepository};
