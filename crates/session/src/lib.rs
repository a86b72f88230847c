//! HTTP sessions for the redis-showcase project.
//!
//! This crate provides:
//! - Session storage (in-memory, or Redis via the `redis` feature)
//! - Session configuration loaded from the environment
//! - An axum extractor that loads or starts the caller's session

mod config;
mod error;
mod extractors;
mod sessions;
mod state;

pub use config::SessionConfig;
pub use error::SessionHttpError;
pub use extractors::HttpSession;
pub use sessions::MemorySessionStore;
#[cfg(feature = "redis")]
pub use sessions::RedisSessionStore;
pub use state::SessionState;
