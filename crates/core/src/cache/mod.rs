mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{cache_key, ORDER_BY_ID_CACHE};
pub use serialization::{deserialize_order, serialize_order, SerializationError};
pub use traits::Cache;
