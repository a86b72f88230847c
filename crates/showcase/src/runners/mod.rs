//! Demo runners executed once at startup.
//!
//! Each runner exercises one Redis feature and logs what it observed. They
//! run sequentially in a fixed order; a failing runner is logged and the
//! next one still runs.

mod caching;
mod geography;
mod pubsub;
mod repositories;

use async_trait::async_trait;

pub use caching::CachingRunner;
pub use geography::GeographyRunner;
pub use pubsub::PubSubRunner;
pub use repositories::RepositoriesRunner;

use crate::state::AppState;

/// One step of the startup demo.
#[async_trait]
pub trait Runner: Send + Sync {
    /// Human-readable title logged before the runner starts.
    fn title(&self) -> &str;

    async fn run(&self) -> anyhow::Result<()>;
}

/// Builds the runners in the order they are executed.
pub fn all(state: &AppState) -> Vec<Box<dyn Runner>> {
    vec![
        Box::new(PubSubRunner::new(state.pubsub.clone())),
        Box::new(RepositoriesRunner::new(
            state.orders.clone(),
            state.line_items.clone(),
            state.ids.clone(),
        )),
        Box::new(GeographyRunner::new(state.geo.clone())),
        Box::new(CachingRunner::new(state.order_lookup.clone())),
    ]
}

/// Runs every runner in order. Returns how many failed.
pub async fn run_all(runners: &[Box<dyn Runner>]) -> usize {
    let mut failures = 0;

    for runner in runners {
        tracing::info!("{}:", runner.title().to_uppercase());

        if let Err(err) = runner.run().await {
            failures += 1;
            tracing::error!(runner = runner.title(), error = %err, "Runner failed");
        }
    }

    failures
}
