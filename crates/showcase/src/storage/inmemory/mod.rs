//! In-memory storage backend.
//!
//! Data is not persisted and is lost when the repository is dropped.

mod ids;
mod repository;

pub use ids::InMemoryIdGenerator;
pub use repository::InMemoryRepository;
