//! Geo index backends.
//!
//! - `memory`: nested HashMaps, distances computed with the same haversine
//!   formula Redis uses
//! - `redis_impl`: `GEOADD` / `GEORADIUS` on a sorted set (with `redis` feature)

pub mod memory;
#[cfg(feature = "redis")]
pub mod redis_impl;

pub use memory::MemoryGeoIndex;
#[cfg(feature = "redis")]
pub use redis_impl::RedisGeoIndex;
