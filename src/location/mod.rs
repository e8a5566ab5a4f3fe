//! Location sources
//!
//! A [`LocationSource`](crate::traits::LocationSource) pushes fixes into a
//! [`LocationFeed`]. This module holds the error type shared by all sources
//! and a scripted source that replays a fixed track.

pub mod scripted;

pub use scripted::{ScriptStep, ScriptedLocationSource};

use serde::{Deserialize, Serialize};

/// Handle returned by `LocationSource::watch`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WatchId(pub i32);

/// Failures reported by a location source
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("position unavailable: {0}")]
    PositionUnavailable(String),

    #[error("timed out: {0}")]
    Timeout(String),

    #[error("geolocation is not supported by this host")]
    Unsupported,
}

impl LocationError {
    /// Maps the W3C geolocation error codes (1, 2, 3)
    pub fn from_code(code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            1 => Self::PermissionDenied(message),
            3 => Self::Timeout(message),
            _ => Self::PositionUnavailable(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            LocationError::from_code(1, "User denied Geolocation"),
            LocationError::PermissionDenied("User denied Geolocation".into())
        );
        assert!(matches!(
            LocationError::from_code(2, ""),
            LocationError::PositionUnavailable(_)
        ));
        assert!(matches!(LocationError::from_code(3, ""), LocationError::Timeout(_)));
        assert!(matches!(
            LocationError::from_code(42, "odd"),
            LocationError::PositionUnavailable(_)
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LocationError::Timeout("no fix".into()).to_string(),
            "timed out: no fix"
        );
        assert_eq!(
            LocationError::Unsupported.to_string(),
            "geolocation is not supported by this host"
        );
    }
}
