use std::fmt;

use serde::{Deserialize, Serialize};

use super::{GeoError, Result};

/// Geo set holding the Sicilian cities of the demo.
pub const SICILY_KEY: &str = "Sicily";

/// Largest longitude accepted by the geo index.
pub const MAX_LONGITUDE: f64 = 180.0;

/// Largest latitude accepted by the geo index (the Web Mercator limit).
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// A coordinate, longitude first as in Redis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub longitude: f64,
    pub latitude: f64,
}

impl Point {
    /// Creates a point, rejecting coordinates the index cannot store.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self> {
        let valid = longitude.is_finite()
            && latitude.is_finite()
            && longitude.abs() <= MAX_LONGITUDE
            && latitude.abs() <= MAX_LATITUDE;
        if !valid {
            return Err(GeoError::InvalidCoordinates {
                longitude,
                latitude,
            });
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.longitude, self.latitude)
    }
}

/// Unit of a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Meters,
    Kilometers,
    Miles,
    Feet,
}

impl DistanceUnit {
    /// How many meters one unit spans. Matches the factors Redis uses.
    pub fn meters_per_unit(self) -> f64 {
        match self {
            Self::Meters => 1.0,
            Self::Kilometers => 1000.0,
            Self::Miles => 1609.34,
            Self::Feet => 0.3048,
        }
    }

    /// The abbreviation Redis commands accept.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Kilometers => "km",
            Self::Miles => "mi",
            Self::Feet => "ft",
        }
    }
}

/// A distance in a given unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub value: f64,
    pub unit: DistanceUnit,
}

impl Distance {
    pub fn new(value: f64, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }

    pub fn kilometers(value: f64) -> Self {
        Self::new(value, DistanceUnit::Kilometers)
    }

    pub fn from_meters(meters: f64, unit: DistanceUnit) -> Self {
        Self::new(meters / unit.meters_per_unit(), unit)
    }

    pub fn in_meters(&self) -> f64 {
        self.value * self.unit.meters_per_unit()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} {}", self.value, self.unit.abbreviation())
    }
}

/// A search area around a center point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: Distance,
}

impl Circle {
    /// Creates a circle, rejecting negative or non-finite radii.
    pub fn new(center: Point, radius: Distance) -> Result<Self> {
        if !radius.value.is_finite() || radius.value < 0.0 {
            return Err(GeoError::InvalidRadius(radius.value));
        }
        Ok(Self { center, radius })
    }
}

/// A member found by a radius query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoResult {
    pub member: String,
    /// Stored position; backends that do not return coordinates leave it empty.
    pub point: Option<Point>,
    /// Distance from the query center, in the query's unit.
    pub distance: Distance,
}

impl fmt::Display for GeoResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.point {
            Some(point) => write!(f, "{} at {}: {}", self.member, point, self.distance),
            None => write!(f, "{}: {}", self.member, self.distance),
        }
    }
}
