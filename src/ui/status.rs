//! Status text shown next to the compass

use crate::core::constants::{COORDINATE_PRECISION, DISTANCE_PRECISION};
use crate::core::geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// The two status lines produced by every update cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub coordinates: String,
    pub distance: String,
}

impl StatusReport {
    pub fn new(position: GeoPoint, distance_km: f64) -> Self {
        Self {
            coordinates: format!(
                "GPS: {}, {}",
                to_fixed(position.lat, COORDINATE_PRECISION),
                to_fixed(position.lon, COORDINATE_PRECISION)
            ),
            distance: format!("Distance: {} km", to_fixed(distance_km, DISTANCE_PRECISION)),
        }
    }
}

/// Fixed-point text with exact ties rounded away from zero
///
/// `{:.N}` on its own breaks exact ties toward the even digit (`0.125` gives
/// `0.12`); browsers' `Number.prototype.toFixed` gives `0.13`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    // Enough places for the exact expansion of any finite f64
    let exact = format!("{magnitude:.1100}");
    let fraction = exact
        .split_once('.')
        .map_or("", |(_, fraction)| fraction.trim_end_matches('0'));
    let tie = fraction.len() == digits + 1 && fraction.ends_with('5');

    // One ulp up turns the tie into an ordinary round-up
    let rounded = if tie {
        f64::from_bits(magnitude.to_bits() + 1)
    } else {
        magnitude
    };
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{rounded:.digits$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_rounds_ties_up() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.625, 2), "0.63");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_to_fixed_matches_plain_rounding_elsewhere() {
        assert_eq!(to_fixed(0.124, 2), "0.12");
        assert_eq!(to_fixed(0.126, 2), "0.13");
        // 1.005 is stored just below the tie
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(0.0, 2), "0.00");
        assert_eq!(to_fixed(-105.250928, 6), "-105.250928");
    }

    #[test]
    fn test_status_distance_tie() {
        let report = StatusReport::new(GeoPoint::new(0.0, 0.0), 0.125);
        assert_eq!(report.distance, "Distance: 0.13 km");
    }

    #[test]
    fn test_status_formatting() {
        let report = StatusReport::new(GeoPoint::new(40.0, -105.0), 21.736958);
        assert_eq!(report.coordinates, "GPS: 40.000000, -105.000000");
        assert_eq!(report.distance, "Distance: 21.74 km");
    }

    #[test]
    fn test_status_rounds_small_distances() {
        let report = StatusReport::new(GeoPoint::new(40.035841, -105.250928), 0.004);
        assert_eq!(report.coordinates, "GPS: 40.035841, -105.250928");
        assert_eq!(report.distance, "Distance: 0.00 km");
    }
}
