//! Great-circle distance and radius filtering.
//!
//! Uses the same haversine formula and earth radius as Redis so that the
//! in-memory index agrees with `GEODIST` / `GEORADIUS` up to Redis's geohash
//! quantization.

use super::{Circle, Distance, GeoResult, Point};

/// Earth radius used by Redis geo commands.
pub const EARTH_RADIUS_METERS: f64 = 6_372_797.560_856;

/// Distance in meters between two points.
pub fn haversine_distance(from: Point, to: Point) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let u = ((lat2 - lat1) / 2.0).sin();
    let v = ((to.longitude - from.longitude).to_radians() / 2.0).sin();
    2.0 * EARTH_RADIUS_METERS * (u * u + lat1.cos() * lat2.cos() * v * v).sqrt().asin()
}

/// Returns the members within `circle`, nearest first, with distances in the
/// circle's unit.
pub fn search_radius<'a, I>(members: I, circle: &Circle) -> Vec<GeoResult>
where
    I: IntoIterator<Item = (&'a str, Point)>,
{
    let limit = circle.radius.in_meters();
    let mut found: Vec<(f64, GeoResult)> = members
        .into_iter()
        .filter_map(|(member, point)| {
            let meters = haversine_distance(circle.center, point);
            (meters <= limit).then(|| {
                (
                    meters,
                    GeoResult {
                        member: member.to_string(),
                        point: Some(point),
                        distance: Distance::from_meters(meters, circle.radius.unit),
                    },
                )
            })
        })
        .collect();

    found.sort_by(|a, b| a.0.total_cmp(&b.0));
    found.into_iter().map(|(_, result)| result).collect()
}
