use futures::future::{FutureExt, LocalBoxFuture};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{js_sys, DomException, MediaStream, MediaStreamConstraints, MediaStreamTrack};

use super::{js_message, to_js_object};
use crate::permissions::{MediaConstraints, MediaSource, MediaTrackSet, PermissionError, Resource};

/// `navigator.mediaDevices.getUserMedia`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserCamera;

pub struct CameraStream(MediaStream);

impl CameraStream {
    pub fn media(&self) -> &MediaStream {
        &self.0
    }
}

impl MediaTrackSet for CameraStream {
    fn stop_tracks(&self) {
        for track in self.0.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
    }
}

impl MediaSource for BrowserCamera {
    type Stream = CameraStream;

    fn open(
        &self,
        constraints: &MediaConstraints,
    ) -> LocalBoxFuture<'static, Result<CameraStream, PermissionError>> {
        let started = start_capture(constraints);
        async move {
            let value = JsFuture::from(started?)
                .await
                .map_err(|e| capture_error(&e))?;
            value
                .dyn_into::<MediaStream>()
                .map(CameraStream)
                .map_err(|_| PermissionError::unavailable(Resource::Camera, "unexpected capture result"))
        }
        .boxed_local()
    }
}

fn start_capture(constraints: &MediaConstraints) -> Result<js_sys::Promise, PermissionError> {
    let window = web_sys::window()
        .ok_or_else(|| PermissionError::unavailable(Resource::Camera, "no browser window"))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| capture_error(&e))?;
    let constraints = to_js_object(Resource::Camera, constraints)?;
    devices
        .get_user_media_with_constraints(constraints.unchecked_ref::<MediaStreamConstraints>())
        .map_err(|e| capture_error(&e))
}

fn capture_error(error: &JsValue) -> PermissionError {
    match error.dyn_ref::<DomException>() {
        Some(exception) => {
            PermissionError::from_dom_exception(Resource::Camera, &exception.name(), &exception.message())
        }
        None => PermissionError::unavailable(Resource::Camera, js_message(error)),
    }
}
