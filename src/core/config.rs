//! Configuration for the compass
//!
//! A `CompassConfig` can be built through [`crate::core::builder::CompassBuilder`],
//! taken from one of the presets, or deserialized from JSON. Every field has a
//! default, so a JSON document only needs to name what it overrides.

use crate::core::{constants, geo::GeoPoint};
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompassConfig {
    /// Fixed point the arrow points at
    pub target: GeoPoint,
    /// Arrival radius in kilometers
    pub arrival_threshold_km: f64,
    pub arrow: ArrowStyle,
    pub anchor: ArrowAnchor,
    pub location: WatchOptions,
    pub camera: CameraConstraints,
}

impl CompassConfig {
    /// Layout of the original full-screen page: arrow pinned near the top
    /// so it does not cover the centre of the camera feed.
    pub fn original_page() -> Self {
        Self {
            anchor: ArrowAnchor::TopCenter {
                offset_y: constants::TOP_ANCHOR_OFFSET,
            },
            ..Self::default()
        }
    }

    /// Parses a JSON document, filling omitted fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for CompassConfig {
    fn default() -> Self {
        Self {
            target: constants::DEFAULT_TARGET,
            arrival_threshold_km: constants::ARRIVAL_THRESHOLD_KM,
            arrow: ArrowStyle::default(),
            anchor: ArrowAnchor::default(),
            location: WatchOptions::default(),
            camera: CameraConstraints::default(),
        }
    }
}

/// Isosceles arrow geometry, in surface pixels relative to the anchor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowStyle {
    pub tip_length: f64,
    pub base_half_width: f64,
    pub base_drop: f64,
    pub fill: String,
}

impl ArrowStyle {
    /// Tip, right corner, left corner in the arrow's own frame (y grows downward)
    pub fn vertices(&self) -> [(f64, f64); 3] {
        [
            (0.0, -self.tip_length),
            (self.base_half_width, self.base_drop),
            (-self.base_half_width, self.base_drop),
        ]
    }
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            tip_length: constants::ARROW_TIP_LENGTH,
            base_half_width: constants::ARROW_BASE_HALF_WIDTH,
            base_drop: constants::ARROW_BASE_DROP,
            fill: constants::ARROW_FILL.to_string(),
        }
    }
}

/// Where on the surface the arrow pivots
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArrowAnchor {
    #[default]
    Center,
    TopCenter {
        offset_y: f64,
    },
}

impl ArrowAnchor {
    pub fn resolve(&self, width: f64, height: f64) -> (f64, f64) {
        match self {
            Self::Center => (width / 2.0, height / 2.0),
            Self::TopCenter { offset_y } => (width / 2.0, *offset_y),
        }
    }
}

/// Options handed to the location source when the watch starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchOptions {
    pub enable_high_accuracy: bool,
    pub timeout_ms: Option<u32>,
    pub maximum_age_ms: Option<u32>,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout_ms: None,
            maximum_age_ms: None,
        }
    }
}

/// Which camera to prefer when requesting the video stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FacingMode {
    /// Rear camera
    #[default]
    Environment,
    /// Front camera
    User,
    /// Whatever the device offers first
    Any,
}

impl FacingMode {
    /// Value of the `facingMode` media constraint, if one should be sent
    pub fn as_constraint(&self) -> Option<&'static str> {
        match self {
            Self::Environment => Some("environment"),
            Self::User => Some("user"),
            Self::Any => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConstraints {
    pub video: bool,
    pub audio: bool,
    pub facing: FacingMode,
}

impl Default for CameraConstraints {
    fn default() -> Self {
        Self {
            video: true,
            audio: false,
            facing: FacingMode::Environment,
        }
    }
}
