//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `showcase_core::storage` and of the `IdGenerator` sequence:
//!
//! - `inmemory`: HashMaps behind `Arc<RwLock<_>>`, always available
//! - `redis_impl`: Redis hashes and sets (with `redis` feature)

pub mod inmemory;

#[cfg(feature = "redis")]
pub mod redis_impl;

pub use inmemory::{InMemoryIdGenerator, InMemoryRepository};

#[cfg(feature = "redis")]
pub use redis_impl::{RedisIdGenerator, RedisRepository};
