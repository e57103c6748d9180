pub mod animation_frame;
pub mod canvas;
pub mod geolocation;
pub mod media;

use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::js_sys;

use crate::permissions::{PermissionError, Resource};

/// Builds a plain JS object from a serde value, for APIs that take
/// dictionaries.
pub(crate) fn to_js_object<T: Serialize>(
    resource: Resource,
    value: &T,
) -> Result<JsValue, PermissionError> {
    let json = serde_json::to_string(value)
        .map_err(|e| PermissionError::unavailable(resource, e.to_string()))?;
    js_sys::JSON::parse(&json).map_err(|e| PermissionError::unavailable(resource, js_message(&e)))
}

pub(crate) fn js_property(target: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

pub(crate) fn js_message(value: &JsValue) -> String {
    js_property(value, "message")
        .and_then(|message| message.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
