//! Glob-style pattern matching for pub/sub channel subscriptions.
//!
//! Supports the subset of Redis glob syntax used in this project:
//! `*` matches any sequence of characters (including none) and `?` matches
//! exactly one character.

/// Checks if a channel name matches a glob pattern.
///
/// # Examples
///
/// ```
/// use showcase_core::patterns::pattern_matches;
///
/// // Exact match
/// assert!(pattern_matches("chat", "chat"));
///
/// // Wildcard at end
/// assert!(pattern_matches("chat*", "chat-room-1"));
///
/// // Single character
/// assert!(pattern_matches("ch?t", "chat"));
///
/// // No match
/// assert!(!pattern_matches("chat", "news"));
/// ```
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let key: Vec<char> = key.chars().collect();

    let (mut p, mut k) = (0, 0);
    // Position of the last `*` seen and the key index it was tried against
    let mut backtrack: Option<(usize, usize)> = None;

    while k < key.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, k));
                p += 1;
            }
            Some('?') => {
                p += 1;
                k += 1;
            }
            Some(c) if *c == key[k] => {
                p += 1;
                k += 1;
            }
            _ => match backtrack {
                // Let the last `*` swallow one more character and retry
                Some((star, star_k)) => {
                    p = star + 1;
                    k = star_k + 1;
                    backtrack = Some((star, star_k + 1));
                }
                None => return false,
            },
        }
    }

    // Trailing stars match the empty remainder
    pattern[p..].iter().all(|c| *c == '*')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(pattern_matches("chat", "chat"));
        assert!(pattern_matches("order-by-id::1", "order-by-id::1"));
        assert!(!pattern_matches("chat", "chats"));
        assert!(!pattern_matches("chats", "chat"));
    }

    #[test]
    fn test_wildcard_at_end() {
        assert!(pattern_matches("order-by-id::*", "order-by-id::123"));
        assert!(pattern_matches("order-by-id::*", "order-by-id::"));
        assert!(!pattern_matches("order-by-id::*", "orders:123"));
    }

    #[test]
    fn test_wildcard_at_start() {
        assert!(pattern_matches("*:when:1700000000000", "orders:when:1700000000000"));
        assert!(!pattern_matches("*:when:1700000000000", "orders:when:1700000000001"));
    }

    #[test]
    fn test_wildcard_in_middle() {
        assert!(pattern_matches("orders:*:idx", "orders:42:idx"));
        assert!(pattern_matches("orders:*:idx", "orders:a:b:idx"));
        assert!(!pattern_matches("orders:*:idx", "orders:42:other"));
    }

    #[test]
    fn test_multiple_wildcards() {
        assert!(pattern_matches("*:*:*", "a:b:c"));
        assert!(pattern_matches("*:middle:*", "start:middle:end"));
        assert!(!pattern_matches("*:middle:*", "start:other:end"));
    }

    #[test]
    fn test_question_mark() {
        assert!(pattern_matches("ch?t", "chat"));
        assert!(pattern_matches("ch?t", "chit"));
        assert!(!pattern_matches("ch?t", "cht"));
        assert!(!pattern_matches("ch?t", "chaat"));
    }

    #[test]
    fn test_wildcard_only() {
        assert!(pattern_matches("*", "anything"));
        assert!(pattern_matches("*", ""));
        assert!(pattern_matches("**", "chat"));
    }

    #[test]
    fn test_empty_pattern() {
        assert!(pattern_matches("", ""));
        assert!(!pattern_matches("", "chat"));
    }
}
