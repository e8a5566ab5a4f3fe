//! Browser bindings
//!
//! Wires the compass to the page: geolocation fixes and the camera stream
//! arrive through JS callbacks, get queued on the dispatcher's channels and
//! are drained right away on the same (only) JS thread.

pub mod camera;
pub mod canvas;
pub mod dom;
pub mod geolocation;

pub use camera::BrowserCamera;
pub use canvas::CanvasSurface;
pub use dom::DomHost;
pub use geolocation::BrowserGeolocation;

use crate::{
    camera::acquire_camera,
    core::{
        config::CompassConfig, constants::GEOLOCATION_UNSUPPORTED_MESSAGE,
        controller::CompassController,
    },
    input::dispatcher::EventDispatcher,
    location::{LocationError, WatchId},
    runtime,
    traits::{CompassHost, LocationSource},
    CompassError,
};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Document, HtmlCanvasElement, HtmlVideoElement, MediaStream};

struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Route `log` output to the browser console; later calls are ignored
pub fn init_console_logging(level: log::LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

struct Session {
    dispatcher: EventDispatcher<MediaStream>,
    controller: CompassController,
    host: DomHost,
}

impl Session {
    fn pump(session: &RefCell<Session>) {
        // Already draining further up the stack; the queued event is picked up there
        let Ok(mut session) = session.try_borrow_mut() else {
            return;
        };
        let Session {
            dispatcher,
            controller,
            host,
        } = &mut *session;
        dispatcher.dispatch_pending(controller, host);
    }
}

/// Handle to a running compass; keeps the JS callbacks alive
#[wasm_bindgen]
pub struct CompassApp {
    session: Rc<RefCell<Session>>,
    geolocation: BrowserGeolocation,
    watch: Option<WatchId>,
}

#[wasm_bindgen]
impl CompassApp {
    /// Stop following the player's position
    pub fn stop(&mut self) {
        if let Some(id) = self.watch.take() {
            self.geolocation.clear_watch(id);
        }
    }

    /// Refit the canvas to the viewport and redraw the last frame
    pub fn resize(&self) -> Result<(), JsValue> {
        let mut session = self.session.borrow_mut();
        let Session {
            controller, host, ..
        } = &mut *session;
        let (width, height) = host.viewport_size();
        host.surface.resize(width, height);
        controller.redraw(host).map_err(to_js)
    }
}

fn to_js(err: CompassError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} has the wrong type")))
}

/// Start the compass on the page with the default configuration
#[wasm_bindgen]
pub fn start_compass(
    canvas_id: &str,
    video_id: &str,
    coordinates_id: &str,
    distance_id: &str,
) -> Result<CompassApp, JsValue> {
    start_with_config(
        CompassConfig::default(),
        canvas_id,
        video_id,
        coordinates_id,
        distance_id,
    )
}

/// Start the compass with a JSON configuration
#[wasm_bindgen]
pub fn start_compass_with_json(
    config: &str,
    canvas_id: &str,
    video_id: &str,
    coordinates_id: &str,
    distance_id: &str,
) -> Result<CompassApp, JsValue> {
    let config = CompassConfig::from_json(config).map_err(to_js)?;
    start_with_config(config, canvas_id, video_id, coordinates_id, distance_id)
}

fn start_with_config(
    config: CompassConfig,
    canvas_id: &str,
    video_id: &str,
    coordinates_id: &str,
    distance_id: &str,
) -> Result<CompassApp, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    init_console_logging(log::LevelFilter::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = element(&document, canvas_id)?;
    let video: HtmlVideoElement = element(&document, video_id)?;
    let coordinates = element(&document, coordinates_id)?;
    let distance = element(&document, distance_id)?;

    let surface = CanvasSurface::new(canvas).map_err(to_js)?;
    let host = DomHost::new(window, surface, coordinates, distance, video);
    let (width, height) = host.viewport_size();
    host.surface.resize(width, height);

    let location_options = config.location;
    let camera_constraints = config.camera;
    let (dispatcher, location_feed, camera_feed) = EventDispatcher::with_feeds();
    let session = Rc::new(RefCell::new(Session {
        dispatcher,
        controller: CompassController::new(config),
        host,
    }));

    let wake: Rc<dyn Fn()> = {
        let session = session.clone();
        Rc::new(move || Session::pump(&session))
    };

    let mut geolocation = BrowserGeolocation::new(wake.clone());
    let watch = match geolocation.watch(&location_options, location_feed) {
        Ok(id) => Some(id),
        Err(err) => {
            let mut session = session.borrow_mut();
            if err == LocationError::Unsupported {
                session.host.alert(GEOLOCATION_UNSUPPORTED_MESSAGE);
            }
            session.host.report_error(&CompassError::Location(err));
            None
        }
    };

    runtime::spawn_local(async move {
        if acquire_camera(&BrowserCamera, camera_constraints, camera_feed).await {
            wake();
        }
    });

    Ok(CompassApp {
        session,
        geolocation,
        watch,
    })
}
