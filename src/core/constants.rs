//! Core constants for the compass.
//! Keeping them in a single place makes it easier to tweak the handful of magic numbers.

use crate::core::geo::GeoPoint;

/// Mean Earth radius in kilometers used by the haversine distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance in kilometers at or below which the target counts as reached (20 m).
pub const ARRIVAL_THRESHOLD_KM: f64 = 0.02;

/// Default cache location (Boulder, CO).
pub const DEFAULT_TARGET: GeoPoint = GeoPoint::new(40.035841, -105.250928);

/// Arrow tip distance above the anchor, in surface pixels.
pub const ARROW_TIP_LENGTH: f64 = 50.0;

/// Horizontal offset of each base corner from the anchor, in surface pixels.
pub const ARROW_BASE_HALF_WIDTH: f64 = 20.0;

/// Vertical offset of the base below the anchor, in surface pixels.
pub const ARROW_BASE_DROP: f64 = 20.0;

/// Arrow fill, any CSS colour string.
pub const ARROW_FILL: &str = "yellow";

/// Vertical anchor offset used by the original full-screen page, in pixels.
pub const TOP_ANCHOR_OFFSET: f64 = 100.0;

/// Decimal places shown for coordinates in the status line.
pub const COORDINATE_PRECISION: usize = 6;

/// Decimal places shown for the distance in the status line.
pub const DISTANCE_PRECISION: usize = 2;

/// Message passed to the notifier when the target is reached.
pub const ARRIVAL_MESSAGE: &str = "Congratulations! You've reached the target!";

/// Alert shown when the host has no geolocation at all.
pub const GEOLOCATION_UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported by your browser.";
