use crate::core::constants::EARTH_RADIUS_KM;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a geographical coordinate with latitude and longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a new GeoPoint coordinate
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Validates that the coordinates are within valid ranges
    ///
    /// The update cycle never calls this; location sources are trusted to
    /// deliver sane fixes. Hosts can use it to filter input they build by hand.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..180.0).contains(&self.lon)
    }

    /// Great-circle distance to another point in kilometers
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        distance(*self, *other)
    }

    /// Initial bearing toward another point in degrees
    pub fn bearing_to(&self, other: &GeoPoint) -> f64 {
        bearing(*self, *other)
    }
}

impl Default for GeoPoint {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Haversine great-circle distance between two points in kilometers.
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Initial bearing along the great circle from `a` toward `b`.
///
/// The result is a compass heading in `[0, 360)` with 0 = north and 90 = east.
/// Coincident points have no defined heading; `atan2(0, 0)` gives 0 and that is
/// what gets returned.
pub fn bearing(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let y = delta_lon.sin() * lat_b.cos();
    let x = lat_a.cos() * lat_b.sin() - lat_a.sin() * lat_b.cos() * delta_lon.cos();

    normalize_bearing(y.atan2(x).to_degrees())
}

/// Wraps an angle in degrees into `[0, 360)`
pub fn normalize_bearing(degrees: f64) -> f64 {
    let wrapped = (degrees + 360.0) % 360.0;
    // -0.0 and values that round up to exactly 360 both have to land on 0
    if wrapped >= 360.0 || wrapped == 0.0 {
        0.0
    } else if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}
