use std::time::Duration;

/// Default session lifetime: 30 minutes.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(1800);

/// Default name of the session cookie.
pub const DEFAULT_COOKIE_NAME: &str = "SESSION";

/// Session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub session_ttl: Duration,
    pub cookie_name: String,
    pub cookie_secure: bool,
    /// Size of the Redis connection pool used by the Redis store.
    pub pool_size: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_ttl: DEFAULT_SESSION_TTL,
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            cookie_secure: false,
            pool_size: 4,
        }
    }
}

impl SessionConfig {
    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SESSION_TTL_SECONDS`: Session TTL in seconds (default: 1800)
    /// - `SESSION_COOKIE_NAME`: Name of the session cookie (default: `SESSION`)
    /// - `COOKIE_SECURE`: Whether to set the secure flag on cookies (default: false)
    /// - `SESSION_POOL_SIZE`: Redis pool size for the session store (default: 4)
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let session_ttl = lookup("SESSION_TTL_SECONDS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.session_ttl);

        let cookie_name = lookup("SESSION_COOKIE_NAME")
            .filter(|name| !name.is_empty())
            .unwrap_or(defaults.cookie_name);

        let cookie_secure = lookup("COOKIE_SECURE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(defaults.cookie_secure);

        let pool_size = lookup("SESSION_POOL_SIZE")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(defaults.pool_size);

        Self {
            session_ttl,
            cookie_name,
            cookie_secure,
            pool_size,
        }
    }

    /// The TTL as a chrono duration, for expiry arithmetic.
    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.session_ttl).unwrap_or(chrono::Duration::seconds(1800))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SessionConfig::from_lookup(lookup(&[]));

        assert_eq!(config.session_ttl, Duration::from_secs(1800));
        assert_eq!(config.cookie_name, "SESSION");
        assert!(!config.cookie_secure);
        assert_eq!(config.pool_size, 4);
    }

    #[test]
    fn test_reads_overrides() {
        let config = SessionConfig::from_lookup(lookup(&[
            ("SESSION_TTL_SECONDS", "60"),
            ("SESSION_COOKIE_NAME", "sid"),
            ("COOKIE_SECURE", "1"),
            ("SESSION_POOL_SIZE", "8"),
        ]));

        assert_eq!(config.session_ttl, Duration::from_secs(60));
        assert_eq!(config.cookie_name, "sid");
        assert!(config.cookie_secure);
        assert_eq!(config.pool_size, 8);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = SessionConfig::from_lookup(lookup(&[
            ("SESSION_TTL_SECONDS", "soon"),
            ("SESSION_COOKIE_NAME", ""),
            ("COOKIE_SECURE", "yes"),
            ("SESSION_POOL_SIZE", "0"),
        ]));

        assert_eq!(config.session_ttl, DEFAULT_SESSION_TTL);
        assert_eq!(config.cookie_name, DEFAULT_COOKIE_NAME);
        assert!(!config.cookie_secure);
        assert_eq!(config.pool_size, 4);
    }

    #[test]
    fn test_ttl_as_chrono() {
        let config = SessionConfig::default();
        assert_eq!(config.ttl(), chrono::Duration::minutes(30));
    }
}
