//! Cache backend implementations.
//!
//! This module provides concrete implementations of the `Cache` trait
//! defined in `showcase_core::cache`:
//!
//! - `memory`: In-memory LRU cache, always available
//! - `redis_impl`: Redis cache (with `redis` feature)

pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

pub use memory::MemoryCache;

#[cfg(feature = "redis")]
pub use redis_impl::RedisCache;
