//! Core domain for the redis-showcase project.
//!
//! Everything in this crate is pure: types, traits, key naming, conversions
//! and math. Backends live in the `showcase` and `showcase_session` crates.

pub mod cache;
pub mod geo;
pub mod messaging;
pub mod orders;
pub mod patterns;
#[cfg(feature = "session")]
pub mod session;
pub mod storage;
