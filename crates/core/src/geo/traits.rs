use async_trait::async_trait;

use super::{Circle, Distance, DistanceUnit, GeoResult, Point, Result};

/// A named set of labeled coordinates.
#[async_trait]
pub trait GeoIndex: Send + Sync {
    /// Adds or moves a member. Returns `true` if the member was newly added.
    async fn add(&self, key: &str, point: Point, member: &str) -> Result<bool>;

    /// Returns every member within the circle, nearest first.
    async fn radius(&self, key: &str, within: &Circle) -> Result<Vec<GeoResult>>;

    /// Returns the distance between two members, or `None` if either is missing.
    async fn distance(
        &self,
        key: &str,
        from: &str,
        to: &str,
        unit: DistanceUnit,
    ) -> Result<Option<Distance>>;

    /// Removes a member. Returns `true` if it was present.
    async fn remove(&self, key: &str, member: &str) -> Result<bool>;
}
