//! Redis storage backend.
//!
//! Entities are hashes under `{keyspace}:{id}`, listed in the set
//! `{keyspace}`. Indexed fields are sets under `{keyspace}:{field}:{value}`,
//! and `{keyspace}:{id}:idx` records which index sets an entity is in so an
//! upsert or delete can remove stale memberships.

mod error;
mod ids;
mod repository;

pub use ids::RedisIdGenerator;
pub use repository::RedisRepository;
