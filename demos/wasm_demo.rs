use geocompass::web::{self, CompassApp};
use wasm_bindgen::prelude::*;

/// Page markup the demo expects:
///
/// ```html
/// <video id="camera" autoplay playsinline></video>
/// <canvas id="compass"></canvas>
/// <div id="coordinates"></div>
/// <div id="distance"></div>
/// ```
const CANVAS_ID: &str = "compass";
const VIDEO_ID: &str = "camera";
const COORDINATES_ID: &str = "coordinates";
const DISTANCE_ID: &str = "distance";

/// Main WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    web::init_console_logging(log::LevelFilter::Debug);
    log::info!("Geocompass WASM demo initialized!");
}

/// Start the compass against the demo page's elements
#[wasm_bindgen]
pub fn run_demo() -> Result<CompassApp, JsValue> {
    web::start_compass(CANVAS_ID, VIDEO_ID, COORDINATES_ID, DISTANCE_ID)
}

/// Same as `run_demo`, aiming at a caller-chosen cache
#[wasm_bindgen]
pub fn run_demo_with_target(lat: f64, lon: f64) -> Result<CompassApp, JsValue> {
    let config = format!(r#"{{ "target": {{ "lat": {lat}, "lon": {lon} }} }}"#);
    web::start_compass_with_json(&config, CANVAS_ID, VIDEO_ID, COORDINATES_ID, DISTANCE_ID)
}
