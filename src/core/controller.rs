//! The compass update cycle
//!
//! `CompassController` owns the only mutable state in the system: the last
//! known player position. Everything it needs from the outside world is
//! passed in through a [`CompassHost`] on each call.

use crate::{
    camera::CameraError,
    core::{
        config::CompassConfig,
        constants::ARRIVAL_MESSAGE,
        geo::{self, GeoPoint},
    },
    input::events::PositionSample,
    location::LocationError,
    rendering::compass::CompassRenderer,
    traits::CompassHost,
    ui::status::StatusReport,
    CompassError, Result,
};
use instant::Instant;
use serde::{Deserialize, Serialize};

/// Result of one update cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompassReading {
    pub position: GeoPoint,
    pub distance_km: f64,
    pub bearing_deg: f64,
    pub arrived: bool,
}

pub struct CompassController {
    config: CompassConfig,
    renderer: CompassRenderer,
    position: GeoPoint,
    last_reading: Option<CompassReading>,
    last_fix_at: Option<Instant>,
    fixes: u64,
}

impl CompassController {
    pub fn new(config: CompassConfig) -> Self {
        let renderer = CompassRenderer::new(config.arrow.clone(), config.anchor);
        Self {
            config,
            renderer,
            position: GeoPoint::default(),
            last_reading: None,
            last_fix_at: None,
            fixes: 0,
        }
    }

    pub fn config(&self) -> &CompassConfig {
        &self.config
    }

    pub fn target(&self) -> GeoPoint {
        self.config.target
    }

    /// Last known player position, `{0, 0}` until the first fix
    pub fn position(&self) -> GeoPoint {
        self.position
    }

    pub fn last_reading(&self) -> Option<&CompassReading> {
        self.last_reading.as_ref()
    }

    /// Number of fixes processed so far
    pub fn fix_count(&self) -> u64 {
        self.fixes
    }

    /// Distance and bearing from `position` to the target, without side effects
    pub fn reading_for(&self, position: GeoPoint) -> CompassReading {
        let distance_km = geo::distance(position, self.config.target);
        CompassReading {
            position,
            distance_km,
            bearing_deg: geo::bearing(position, self.config.target),
            arrived: distance_km <= self.config.arrival_threshold_km,
        }
    }

    /// Run the full update cycle for a new fix
    ///
    /// Stores the position, publishes the status lines, signals arrival when
    /// within the threshold and redraws the arrow. Arrival is signalled on
    /// every qualifying fix, not only the first one inside the radius.
    pub fn on_position_update<H>(&mut self, sample: PositionSample, host: &mut H) -> Result<CompassReading>
    where
        H: CompassHost + ?Sized,
    {
        let now = Instant::now();
        if let Some(previous) = self.last_fix_at.replace(now) {
            log::debug!(
                "fix {} after {:?} (accuracy {:?} m)",
                self.fixes + 1,
                now.duration_since(previous),
                sample.accuracy_m
            );
        }

        self.position = sample.point;
        self.fixes += 1;

        let reading = self.reading_for(sample.point);
        self.last_reading = Some(reading);

        host.show_status(&StatusReport::new(reading.position, reading.distance_km));

        if reading.arrived {
            log::info!(
                "target reached: {:.1} m from {}",
                reading.distance_km * 1000.0,
                self.config.target
            );
            host.notify_arrival(ARRIVAL_MESSAGE);
        }

        self.renderer.draw(host.surface(), reading.bearing_deg)?;
        Ok(reading)
    }

    /// Redraw the arrow from the stored position, e.g. after a resize
    pub fn redraw<H>(&self, host: &mut H) -> Result<()>
    where
        H: CompassHost + ?Sized,
    {
        let bearing = geo::bearing(self.position, self.config.target);
        self.renderer.draw(host.surface(), bearing)
    }

    /// The location source failed; the last frame stays on screen
    pub fn on_location_error<H>(&mut self, error: LocationError, host: &mut H)
    where
        H: CompassHost + ?Sized,
    {
        log::warn!("Error getting position: {}", error);
        host.report_error(&CompassError::Location(error));
    }

    /// The camera stream could not be acquired; the compass keeps running without it
    pub fn on_camera_error<H>(&mut self, error: CameraError, host: &mut H)
    where
        H: CompassHost + ?Sized,
    {
        log::warn!("Error accessing camera: {}", error);
        host.report_error(&CompassError::Camera(error));
    }
}

impl Default for CompassController {
    fn default() -> Self {
        Self::new(CompassConfig::default())
    }
}
