use crate::{camera::CameraError, core::geo::GeoPoint, location::LocationError};
use serde::{Deserialize, Serialize};

/// One fix delivered by a location source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    pub point: GeoPoint,
    /// Horizontal accuracy radius in meters, if the source reports one
    pub accuracy_m: Option<f64>,
    /// Source timestamp in milliseconds since the Unix epoch
    pub timestamp_ms: Option<f64>,
}

impl PositionSample {
    pub fn new(point: GeoPoint) -> Self {
        Self {
            point,
            accuracy_m: None,
            timestamp_ms: None,
        }
    }

    pub fn at(lat: f64, lon: f64) -> Self {
        Self::new(GeoPoint::new(lat, lon))
    }

    pub fn with_accuracy(mut self, accuracy_m: f64) -> Self {
        self.accuracy_m = Some(accuracy_m);
        self
    }

    pub fn with_timestamp(mut self, timestamp_ms: f64) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }
}

impl From<GeoPoint> for PositionSample {
    fn from(point: GeoPoint) -> Self {
        Self::new(point)
    }
}

/// Events arriving on the location channel
#[derive(Debug, Clone, PartialEq)]
pub enum LocationEvent {
    Position(PositionSample),
    Error(LocationError),
}

/// Events arriving on the camera channel
#[derive(Debug, Clone, PartialEq)]
pub enum CameraEvent<S> {
    Ready(S),
    Failed(CameraError),
}

impl<S> From<std::result::Result<S, CameraError>> for CameraEvent<S> {
    fn from(result: std::result::Result<S, CameraError>) -> Self {
        match result {
            Ok(stream) => Self::Ready(stream),
            Err(err) => Self::Failed(err),
        }
    }
}
