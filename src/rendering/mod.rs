//! Drawing the compass
//!
//! - `compass`: the arrow renderer
//! - `context`: a recording surface for headless use and tests

pub mod compass;
pub mod context;

pub use compass::CompassRenderer;
pub use context::{DrawCommand, RecordingSurface};
