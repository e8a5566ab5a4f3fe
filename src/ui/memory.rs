use crate::{
    rendering::context::RecordingSurface, traits::CompassHost, traits::RenderSurface,
    ui::status::StatusReport, CompassError,
};

/// Host that keeps everything in memory
///
/// Backs the headless demo and the tests: status lines, arrival alerts,
/// reported errors and attached streams are all recorded for inspection.
#[derive(Debug, Clone)]
pub struct MemoryHost<S> {
    pub surface: RecordingSurface,
    pub statuses: Vec<StatusReport>,
    pub arrivals: Vec<String>,
    pub errors: Vec<String>,
    pub streams: Vec<S>,
}

impl<S> MemoryHost<S> {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            surface: RecordingSurface::new(width, height),
            statuses: Vec::new(),
            arrivals: Vec::new(),
            errors: Vec::new(),
            streams: Vec::new(),
        }
    }

    pub fn last_status(&self) -> Option<&StatusReport> {
        self.statuses.last()
    }
}

impl<S> CompassHost for MemoryHost<S> {
    type Stream = S;

    fn surface(&mut self) -> &mut dyn RenderSurface {
        &mut self.surface
    }

    fn show_status(&mut self, status: &StatusReport) {
        log::debug!("{} | {}", status.coordinates, status.distance);
        self.statuses.push(status.clone());
    }

    fn notify_arrival(&mut self, message: &str) {
        log::info!("{}", message);
        self.arrivals.push(message.to_string());
    }

    fn report_error(&mut self, error: &CompassError) {
        log::error!("{}", error);
        self.errors.push(error.to_string());
    }

    fn attach_camera(&mut self, stream: S) {
        self.streams.push(stream);
    }
}
