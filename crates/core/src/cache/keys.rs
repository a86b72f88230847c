//! Cache key naming.
//!
//! Keys follow the `{cache name}::{key}` layout.

/// Cache holding orders looked up by ID.
pub const ORDER_BY_ID_CACHE: &str = "order-by-id";

const SEPARATOR: &str = "::";

/// Returns the cache key for an entry of a named cache.
///
/// # Examples
///
/// ```
/// use showcase_core::cache::{cache_key, ORDER_BY_ID_CACHE};
///
/// assert_eq!(cache_key(ORDER_BY_ID_CACHE, 42), "order-by-id::42");
/// ```
pub fn cache_key(cache_name: &str, key: impl std::fmt::Display) -> String {
    format!("{}{}{}", cache_name, SEPARATOR, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key() {
        assert_eq!(cache_key(ORDER_BY_ID_CACHE, 1), "order-by-id::1");
        assert_eq!(cache_key("greetings", "en"), "greetings::en");
    }
}
