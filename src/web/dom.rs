use crate::{
    traits::{CompassHost, RenderSurface},
    ui::status::StatusReport,
    web::canvas::CanvasSurface,
    CompassError,
};
use web_sys::{Element, HtmlVideoElement, MediaStream, Window};

/// Page elements surrounding the compass
pub struct DomHost {
    pub(crate) window: Window,
    pub(crate) surface: CanvasSurface,
    coordinates: Element,
    distance: Element,
    video: HtmlVideoElement,
}

impl DomHost {
    pub fn new(
        window: Window,
        surface: CanvasSurface,
        coordinates: Element,
        distance: Element,
        video: HtmlVideoElement,
    ) -> Self {
        Self {
            window,
            surface,
            coordinates,
            distance,
            video,
        }
    }

    /// Blocking `window.alert`
    pub fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", err);
        }
    }

    /// Viewport size in CSS pixels
    pub fn viewport_size(&self) -> (u32, u32) {
        let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as u32
        };
        (
            dimension(self.window.inner_width()),
            dimension(self.window.inner_height()),
        )
    }
}

impl CompassHost for DomHost {
    type Stream = MediaStream;

    fn surface(&mut self) -> &mut dyn RenderSurface {
        &mut self.surface
    }

    fn show_status(&mut self, status: &StatusReport) {
        self.coordinates.set_text_content(Some(&status.coordinates));
        self.distance.set_text_content(Some(&status.distance));
    }

    fn notify_arrival(&mut self, message: &str) {
        self.alert(message);
    }

    fn report_error(&mut self, error: &CompassError) {
        web_sys::console::error_1(&error.to_string().into());
    }

    fn attach_camera(&mut self, stream: MediaStream) {
        self.video.set_src_object(Some(&stream));
    }
}
