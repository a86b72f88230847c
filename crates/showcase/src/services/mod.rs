//! Order lookups backing the caching demo.
//!
//! - `slow`: a deliberately slow lookup standing in for an expensive call
//! - `cached`: a cache-aside decorator over any `OrderLookup`

pub mod cached;
pub mod slow;

pub use cached::CachedOrderLookup;
pub use slow::SlowOrderLookup;
