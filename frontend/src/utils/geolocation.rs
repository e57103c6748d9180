use futures::future::{FutureExt, LocalBoxFuture};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{js_sys, PositionOptions};

use super::{js_message, js_property, to_js_object};
use crate::permissions::{LocationOptions, PermissionError, PositionFix, PositionSource, Resource};

/// `navigator.geolocation.getCurrentPosition`, wrapped in a promise.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserGeolocation;

impl PositionSource for BrowserGeolocation {
    fn current_position(
        &self,
        options: &LocationOptions,
    ) -> LocalBoxFuture<'static, Result<PositionFix, PermissionError>> {
        let started = locate(options);
        async move {
            let position = JsFuture::from(started?)
                .await
                .map_err(|e| position_error(&e))?;
            read_fix(&position)
        }
        .boxed_local()
    }
}

fn locate(options: &LocationOptions) -> Result<js_sys::Promise, PermissionError> {
    let window = web_sys::window()
        .ok_or_else(|| PermissionError::unavailable(Resource::Location, "no browser window"))?;
    let geolocation = window
        .navigator()
        .geolocation()
        .map_err(|e| position_error(&e))?;
    let options = to_js_object(Resource::Location, options)?;
    Ok(js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
            &resolve,
            Some(&reject),
            options.unchecked_ref::<PositionOptions>(),
        ) {
            if let Err(e) = reject.call1(&JsValue::NULL, &e) {
                log::error!("could not reject geolocation promise: {:?}", e);
            }
        }
    }))
}

fn position_error(error: &JsValue) -> PermissionError {
    match js_property(error, "code").and_then(|code| code.as_f64()) {
        Some(code) => PermissionError::from_geolocation_code(code as u16, &js_message(error)),
        None => PermissionError::unavailable(Resource::Location, js_message(error)),
    }
}

fn read_fix(position: &JsValue) -> Result<PositionFix, PermissionError> {
    let malformed = || PermissionError::unavailable(Resource::Location, "malformed position");
    let coords = js_property(position, "coords").ok_or_else(malformed)?;
    let number = |target: &JsValue, key: &str| js_property(target, key).and_then(|v| v.as_f64());
    Ok(PositionFix {
        latitude: number(&coords, "latitude").ok_or_else(malformed)?,
        longitude: number(&coords, "longitude").ok_or_else(malformed)?,
        accuracy: number(&coords, "accuracy").unwrap_or(f64::NAN),
    })
}
