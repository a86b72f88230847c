use std::{env, fmt, time::Duration};

/// Storage backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Backend {
    /// Redis for everything: repositories, geo, cache, pub/sub and sessions.
    Redis,
    /// Process-local stand-ins; nothing survives a restart.
    Memory,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Redis => write!(f, "redis"),
            Backend::Memory => write!(f, "memory"),
        }
    }
}

/// Capacity of the in-memory cache when `CACHE_MAX_ENTRIES` is unset.
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 10_000;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URL (default: "redis://localhost:6379")
    pub redis_url: String,
    /// Capacity bound of the in-memory cache provider (default: 10,000)
    pub cache_max_entries: usize,
    /// Delay of the slow order lookup in milliseconds (default: 10,000)
    pub order_lookup_delay_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `CACHE_MAX_ENTRIES` - Maximum in-memory cache entries (default: 10,000)
    /// - `ORDER_LOOKUP_DELAY_MS` - Slow lookup delay (default: 10,000)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            redis_url: lookup("REDIS_URL")
                .unwrap_or_else(|| "redis://localhost:6379".to_string()),
            cache_max_entries: lookup("CACHE_MAX_ENTRIES")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_CACHE_MAX_ENTRIES),
            order_lookup_delay_ms: lookup("ORDER_LOOKUP_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
        }
    }

    /// Get the slow lookup delay as a Duration.
    pub fn order_lookup_delay(&self) -> Duration {
        Duration::from_millis(self.order_lookup_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
