//! Compass builder for fluent configuration
//!
//! Starts from a preset (or the default) and overrides individual settings
//! before producing a [`CompassController`].

use crate::core::{
    config::{ArrowAnchor, ArrowStyle, CameraConstraints, CompassConfig, FacingMode, WatchOptions},
    controller::CompassController,
    geo::GeoPoint,
};

/// Builder for creating and configuring compass controllers
#[derive(Debug, Clone, Default)]
pub struct CompassBuilder {
    config: CompassConfig,
}

impl CompassBuilder {
    /// Create a new CompassBuilder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: CompassConfig) -> Self {
        Self { config }
    }

    /// Set the cache location
    pub fn with_target(mut self, target: GeoPoint) -> Self {
        self.config.target = target;
        self
    }

    /// Set the arrival radius in kilometers
    pub fn with_arrival_threshold_km(mut self, threshold_km: f64) -> Self {
        self.config.arrival_threshold_km = threshold_km;
        self
    }

    pub fn with_arrow(mut self, arrow: ArrowStyle) -> Self {
        self.config.arrow = arrow;
        self
    }

    /// Set the arrow colour (any CSS colour string)
    pub fn with_arrow_fill(mut self, fill: impl Into<String>) -> Self {
        self.config.arrow.fill = fill.into();
        self
    }

    pub fn with_anchor(mut self, anchor: ArrowAnchor) -> Self {
        self.config.anchor = anchor;
        self
    }

    pub fn with_watch_options(mut self, options: WatchOptions) -> Self {
        self.config.location = options;
        self
    }

    /// Enable or disable high-accuracy fixes
    pub fn with_high_accuracy(mut self, enabled: bool) -> Self {
        self.config.location.enable_high_accuracy = enabled;
        self
    }

    pub fn with_camera(mut self, constraints: CameraConstraints) -> Self {
        self.config.camera = constraints;
        self
    }

    /// Prefer a particular camera
    pub fn with_facing(mut self, facing: FacingMode) -> Self {
        self.config.camera.facing = facing;
        self
    }

    /// Finish and return the configuration only
    pub fn build_config(self) -> CompassConfig {
        self.config
    }

    /// Build the controller
    pub fn build(self) -> CompassController {
        log::debug!(
            "building compass for target {} (arrival within {} km)",
            self.config.target,
            self.config.arrival_threshold_km
        );
        CompassController::new(self.config)
    }
}
