//! Session storage implementations.
//!
//! Provides `SessionRepository` implementations for:
//! - In-memory (always available)
//! - Redis (with `redis` feature)

mod inmemory;
#[cfg(feature = "redis")]
mod redis_impl;

pub use inmemory::MemorySessionStore;
#[cfg(feature = "redis")]
pub use redis_impl::RedisSessionStore;
