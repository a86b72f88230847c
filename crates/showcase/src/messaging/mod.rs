//! Pub/sub backends and the listener container.

mod listener;
pub mod memory;
#[cfg(feature = "redis")]
pub mod redis_impl;

pub use listener::{ListenerContainer, LoggingListener};
pub use memory::MemoryPubSub;
#[cfg(feature = "redis")]
pub use redis_impl::RedisPubSub;
