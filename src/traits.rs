//! Shared trait abstractions for the compass seams
//!
//! Everything the core needs from its environment goes through one of these:
//! a surface to draw on, a host that shows status and alerts, a source of
//! location fixes and a source for the camera stream.

use crate::{
    camera::CameraError,
    core::config::{CameraConstraints, WatchOptions},
    input::dispatcher::LocationFeed,
    location::{LocationError, WatchId},
    ui::status::StatusReport,
    CompassError, Result,
};
use async_trait::async_trait;

/// 2D drawing surface with a canvas-like save/restore transform stack
///
/// Rotation is in radians and clockwise on screen, since the y axis grows
/// downward.
pub trait RenderSurface {
    /// Surface width in pixels
    fn width(&self) -> f64;

    /// Surface height in pixels
    fn height(&self) -> f64;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Push the current transform and fill style
    fn save(&mut self);

    /// Pop the state pushed by the matching `save`
    fn restore(&mut self);

    fn translate(&mut self, x: f64, y: f64) -> Result<()>;

    fn rotate(&mut self, radians: f64) -> Result<()>;

    fn set_fill_style(&mut self, color: &str);

    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    fn close_path(&mut self);

    fn fill(&mut self);

    /// Clear the whole surface
    fn clear(&mut self) {
        let (width, height) = (self.width(), self.height());
        self.clear_rect(0.0, 0.0, width, height);
    }
}

/// Everything around the compass that the user sees
pub trait CompassHost {
    /// Handle to an acquired camera stream
    type Stream;

    /// Surface the arrow is drawn on
    fn surface(&mut self) -> &mut dyn RenderSurface;

    /// Show the coordinate and distance lines
    fn show_status(&mut self, status: &StatusReport);

    /// Tell the user the target has been reached
    fn notify_arrival(&mut self, message: &str);

    /// Report a failure; the compass keeps running afterwards
    fn report_error(&mut self, error: &CompassError);

    /// Display the camera stream under the compass
    fn attach_camera(&mut self, stream: Self::Stream);
}

/// Pushes position fixes into a feed until the watch is cleared
pub trait LocationSource {
    /// Start watching; fixes and errors are delivered through `feed`
    fn watch(
        &mut self,
        options: &WatchOptions,
        feed: LocationFeed,
    ) -> std::result::Result<WatchId, LocationError>;

    /// Stop a watch started by `watch`; unknown ids are ignored
    fn clear_watch(&mut self, id: WatchId);
}

/// One-shot asynchronous access to a video stream
#[async_trait(?Send)]
pub trait CameraSource {
    type Stream;

    async fn request_stream(
        &self,
        constraints: &CameraConstraints,
    ) -> std::result::Result<Self::Stream, CameraError>;
}
