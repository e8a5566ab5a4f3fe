pub mod dispatcher;
pub mod events;

pub use dispatcher::{CameraFeed, EventDispatcher, LocationFeed};
pub use events::{CameraEvent, LocationEvent, PositionSample};
