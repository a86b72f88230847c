mod distance;
mod error;
mod traits;
mod types;

pub use distance::{haversine_distance, search_radius, EARTH_RADIUS_METERS};
pub use error::{GeoError, Result};
pub use traits::GeoIndex;
pub use types::{
    Circle, Distance, DistanceUnit, GeoResult, Point, MAX_LATITUDE, MAX_LONGITUDE, SICILY_KEY,
};
