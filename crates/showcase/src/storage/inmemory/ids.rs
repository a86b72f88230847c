use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use showcase_core::orders::{EntityId, IdGenerator, OrderError, Result};

/// Per-keyspace counters starting at 1.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdGenerator {
    sequences: Arc<Mutex<HashMap<String, u64>>>,
}

impl InMemoryIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdGenerator for InMemoryIdGenerator {
    async fn next_id(&self, keyspace: &str) -> Result<EntityId> {
        let mut sequences = self
            .sequences
            .lock()
            .map_err(|_| OrderError::IdGeneration("sequence lock poisoned".to_string()))?;
        let next = sequences.entry(keyspace.to_string()).or_insert(0);
        *next = next
            .checked_add(1)
            .ok_or_else(|| OrderError::IdGeneration(format!("{} sequence exhausted", keyspace)))?;
        EntityId::try_from(*next)
    }
}
