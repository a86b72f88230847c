//! Redis geo index implementation.
//!
//! Redis stores positions as 52-bit geohashes, so coordinates read back from
//! `GEORADIUS ... WITHCOORD` differ from the inserted ones in the sixth
//! decimal place.

use async_trait::async_trait;
use redis::geo::{Coord, RadiusOptions, RadiusOrder, RadiusSearchResult, Unit};
use redis::AsyncCommands;

use showcase_core::geo::{
    Circle, Distance, DistanceUnit, GeoError, GeoIndex, GeoResult, Point, Result,
};

/// Redis geo backend sharing a connection manager.
pub struct RedisGeoIndex {
    conn: redis::aio::ConnectionManager,
}

fn map_redis_error(err: redis::RedisError) -> GeoError {
    if err.is_connection_refusal() || err.is_timeout() || err.is_connection_dropped() {
        GeoError::ConnectionFailed(err.to_string())
    } else {
        GeoError::OperationFailed(err.to_string())
    }
}

fn to_redis_unit(unit: DistanceUnit) -> Unit {
    match unit {
        DistanceUnit::Meters => Unit::Meters,
        DistanceUnit::Kilometers => Unit::Kilometers,
        DistanceUnit::Miles => Unit::Miles,
        DistanceUnit::Feet => Unit::Feet,
    }
}

fn to_geo_result(result: RadiusSearchResult, unit: DistanceUnit) -> Result<GeoResult> {
    let point = result
        .coord
        .map(|coord| Point::new(coord.longitude, coord.latitude))
        .transpose()?;
    let value = result.dist.ok_or_else(|| {
        GeoError::OperationFailed(format!("Missing distance for {}", result.name))
    })?;

    Ok(GeoResult {
        member: result.name,
        point,
        distance: Distance::new(value, unit),
    })
}

impl RedisGeoIndex {
    pub fn new(conn: redis::aio::ConnectionManager) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl GeoIndex for RedisGeoIndex {
    async fn add(&self, key: &str, point: Point, member: &str) -> Result<bool> {
        let mut conn = self.conn.clone();
        let added: usize = conn
            .geo_add(key, (Coord::lon_lat(point.longitude, point.latitude), member))
            .await
            .map_err(map_redis_error)?;
        Ok(added > 0)
    }

    async fn radius(&self, key: &str, within: &Circle) -> Result<Vec<GeoResult>> {
        let mut conn = self.conn.clone();
        let unit = within.radius.unit;
        let options = RadiusOptions::default()
            .with_dist()
            .with_coord()
            .order(RadiusOrder::Asc);

        let results: Vec<RadiusSearchResult> = conn
            .geo_radius(
                key,
                within.center.longitude,
                within.center.latitude,
                within.radius.value,
                to_redis_unit(unit),
                options,
            )
            .await
            .map_err(map_redis_error)?;

        results
            .into_iter()
            .map(|result| to_geo_result(result, unit))
            .collect()
    }

    async fn distance(
        &self,
        key: &str,
        from: &str,
        to: &str,
        unit: DistanceUnit,
    ) -> Result<Option<Distance>> {
        let mut conn = self.conn.clone();
        let value: Option<f64> = conn
            .geo_dist(key, from, to, to_redis_unit(unit))
            .await
            .map_err(map_redis_error)?;
        Ok(value.map(|v| Distance::new(v, unit)))
    }

    async fn remove(&self, key: &str, member: &str) -> Result<bool> {
        let mut conn = self.conn.clone();
        let removed: usize = conn.zrem(key, member).await.map_err(map_redis_error)?;
        Ok(removed > 0)
    }
}
