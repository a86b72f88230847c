use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use showcase_core::orders::{EntityId, OrderLookup};

use super::Runner;

const LABELS: [&str; 3] = ["first", "Two", "Three"];

fn timing_line(label: &str, elapsed: Duration) -> String {
    format!("{} {}", label, elapsed.as_millis())
}

/// Times three lookups of the same order through the cache.
pub struct CachingRunner {
    lookup: Arc<dyn OrderLookup>,
}

impl CachingRunner {
    pub fn new(lookup: Arc<dyn OrderLookup>) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl Runner for CachingRunner {
    fn title(&self) -> &str {
        "caching"
    }

    async fn run(&self) -> anyhow::Result<()> {
        let id = EntityId::try_from(1)?;

        for label in LABELS {
            let started = Instant::now();
            self.lookup.by_id(id).await?;
            tracing::info!("{}", timing_line(label, started.elapsed()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::cache::MemoryCache;
    use crate::services::{CachedOrderLookup, SlowOrderLookup};

    #[tokio::test]
    async fn test_only_first_lookup_is_slow() {
        let delay = Duration::from_millis(100);
        let lookup = CachedOrderLookup::new(
            Arc::new(SlowOrderLookup::new(delay)),
            Arc::new(MemoryCache::new(10)),
        );
        let runner = CachingRunner::new(Arc::new(lookup));

        let started = Instant::now();
        runner.run().await.unwrap();
        let elapsed = started.elapsed();

        assert!(elapsed >= delay);
        assert!(elapsed < delay * 3);
    }

    #[test]
    fn test_timing_lines() {
        let lines: Vec<String> = LABELS
            .iter()
            .zip([10_001, 2, 0])
            .map(|(label, ms)| timing_line(label, Duration::from_millis(ms)))
            .collect();

        assert_eq!(lines, vec!["first 10001", "Two 2", "Three 0"]);
    }
}
