//! Prelude module for common geocompass types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use geocompass::prelude::*;`

pub use crate::core::{
    builder::CompassBuilder,
    config::{ArrowAnchor, ArrowStyle, CameraConstraints, CompassConfig, FacingMode, WatchOptions},
    controller::{CompassController, CompassReading},
    geo::{bearing, distance, normalize_bearing, GeoPoint},
};

pub use crate::input::{
    dispatcher::{CameraFeed, EventDispatcher, LocationFeed},
    events::{CameraEvent, LocationEvent, PositionSample},
};

pub use crate::camera::{acquire_camera, CameraError};
pub use crate::location::{LocationError, ScriptStep, ScriptedLocationSource, WatchId};
pub use crate::rendering::{CompassRenderer, DrawCommand, RecordingSurface};
pub use crate::traits::{CameraSource, CompassHost, LocationSource, RenderSurface};
pub use crate::ui::{MemoryHost, StatusReport};

pub use crate::{CompassError, Result};
