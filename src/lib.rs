//! # geocompass
//!
//! A geocaching compass: follows the player's GPS fixes, works out the
//! great-circle distance and initial bearing to a fixed target, and draws an
//! arrow pointing at it over a live camera feed.
//!
//! The core is host-agnostic. Location fixes, the camera stream, the drawing
//! surface and the status/alert sinks are supplied through the traits in
//! [`traits`]; the `wasm` feature provides browser implementations of all of
//! them in [`web`].

pub mod camera;
pub mod core;
pub mod input;
pub mod location;
pub mod prelude;
pub mod rendering;
pub mod runtime;
pub mod traits;
pub mod ui;

#[cfg(feature = "wasm")]
pub mod web;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    builder::CompassBuilder,
    config::CompassConfig,
    controller::{CompassController, CompassReading},
    geo::{bearing, distance, GeoPoint},
};

pub use camera::CameraError;
pub use input::{
    dispatcher::EventDispatcher,
    events::{CameraEvent, LocationEvent, PositionSample},
};
pub use location::LocationError;
pub use rendering::{compass::CompassRenderer, context::RecordingSurface};
pub use traits::{CameraSource, CompassHost, LocationSource, RenderSurface};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, CompassError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum CompassError {
    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    #[error("Camera error: {0}")]
    Camera(#[from] CameraError),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = CompassError;
