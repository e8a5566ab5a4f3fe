use crate::{camera::CameraError, core::config::CameraConstraints, traits::CameraSource};
use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{DomException, MediaStream, MediaStreamConstraints};

/// `navigator.mediaDevices.getUserMedia` as a camera source
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserCamera;

fn camera_error(err: JsValue) -> CameraError {
    match err.dyn_ref::<DomException>() {
        Some(exception) => CameraError::from_dom_name(&exception.name(), exception.message()),
        None => CameraError::Unavailable(format!("{err:?}")),
    }
}

fn video_constraint(constraints: &CameraConstraints) -> std::result::Result<JsValue, CameraError> {
    if !constraints.video {
        return Ok(JsValue::FALSE);
    }
    match constraints.facing.as_constraint() {
        Some(mode) => {
            let video = js_sys::Object::new();
            js_sys::Reflect::set(&video, &JsValue::from_str("facingMode"), &JsValue::from_str(mode))
                .map_err(camera_error)?;
            Ok(video.into())
        }
        None => Ok(JsValue::TRUE),
    }
}

#[async_trait(?Send)]
impl CameraSource for BrowserCamera {
    type Stream = MediaStream;

    async fn request_stream(
        &self,
        constraints: &CameraConstraints,
    ) -> std::result::Result<MediaStream, CameraError> {
        let devices = web_sys::window()
            .ok_or_else(|| CameraError::Unavailable("no window".to_string()))?
            .navigator()
            .media_devices()
            .map_err(camera_error)?;

        let request = MediaStreamConstraints::new();
        request.set_video(&video_constraint(constraints)?);
        request.set_audio(&JsValue::from_bool(constraints.audio));

        let promise = devices
            .get_user_media_with_constraints(&request)
            .map_err(camera_error)?;
        let stream = JsFuture::from(promise).await.map_err(camera_error)?;

        stream
            .dyn_into::<MediaStream>()
            .map_err(|_| CameraError::Unavailable("getUserMedia did not return a MediaStream".to_string()))
    }
}
