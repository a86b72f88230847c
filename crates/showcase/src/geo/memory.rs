//! In-memory geo index.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use showcase_core::geo::{
    haversine_distance, search_radius, Circle, Distance, DistanceUnit, GeoIndex, GeoResult, Point,
    Result,
};

type Members = HashMap<String, Point>;

/// In-memory geo index keyed like Redis geo sets.
#[derive(Debug, Clone, Default)]
pub struct MemoryGeoIndex {
    sets: Arc<RwLock<HashMap<String, Members>>>,
}

impl MemoryGeoIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GeoIndex for MemoryGeoIndex {
    async fn add(&self, key: &str, point: Point, member: &str) -> Result<bool> {
        let mut sets = self.sets.write().await;
        let previous = sets
            .entry(key.to_string())
            .or_default()
            .insert(member.to_string(), point);
        Ok(previous.is_none())
    }

    async fn radius(&self, key: &str, within: &Circle) -> Result<Vec<GeoResult>> {
        let sets = self.sets.read().await;
        let Some(members) = sets.get(key) else {
            return Ok(Vec::new());
        };
        Ok(search_radius(
            members.iter().map(|(name, point)| (name.as_str(), *point)),
            within,
        ))
    }

    async fn distance(
        &self,
        key: &str,
        from: &str,
        to: &str,
        unit: DistanceUnit,
    ) -> Result<Option<Distance>> {
        let sets = self.sets.read().await;
        let Some(members) = sets.get(key) else {
            return Ok(None);
        };
        let (Some(a), Some(b)) = (members.get(from), members.get(to)) else {
            return Ok(None);
        };
        Ok(Some(Distance::from_meters(haversine_distance(*a, *b), unit)))
    }

    async fn remove(&self, key: &str, member: &str) -> Result<bool> {
        let mut sets = self.sets.write().await;
        let Some(members) = sets.get_mut(key) else {
            return Ok(false);
        };
        let removed = members.remove(member).is_some();
        if members.is_empty() {
            sets.remove(key);
        }
        Ok(removed)
    }
}
