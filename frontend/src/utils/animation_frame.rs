use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::detection::FrameScheduler;

/// `requestAnimationFrame` on the global window.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationFrames;

impl FrameScheduler for AnimationFrames {
    type Token = i32;

    fn request(&self, callback: Box<dyn FnOnce()>) -> Option<i32> {
        let window = web_sys::window()?;
        // Frees itself once invoked; a cancelled frame leaks one closure.
        let closure = Closure::once_into_js(move || callback());
        match window.request_animation_frame(closure.unchecked_ref()) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&self, token: i32) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.cancel_animation_frame(token) {
                log::warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
    }
}
