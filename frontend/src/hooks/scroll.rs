use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::scroll::ViewportScroll;

pub(crate) fn read_viewport() -> Option<ViewportScroll> {
    let window = web_sys::window()?;
    Some(ViewportScroll {
        offset_y: window.scroll_y().ok()?,
        viewport_height: window.inner_height().ok()?.as_f64()?,
    })
}

/// Runs `handler` now and on every window scroll until the returned
/// destructor is called.
pub(crate) fn on_window_scroll(handler: impl Fn() + 'static) -> Box<dyn FnOnce()> {
    let Some(window) = web_sys::window() else {
        return Box::new(|| ());
    };
    let handler = Rc::new(handler);
    let callback = Closure::<dyn Fn()>::new({
        let handler = Rc::clone(&handler);
        move || handler()
    });
    if let Err(e) =
        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
    {
        log::warn!("could not attach scroll listener: {:?}", e);
        return Box::new(|| ());
    }
    // Initial call
    handler();
    Box::new(move || {
        if let Some(win) = web_sys::window() {
            if let Err(e) =
                win.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                log::warn!("could not detach scroll listener: {:?}", e);
            }
        }
    })
}

/// Current scroll offset and viewport height, refreshed on every scroll.
#[hook]
pub fn use_viewport_scroll() -> ViewportScroll {
    let scroll = use_state_eq(ViewportScroll::default);
    {
        let scroll = scroll.clone();
        use_effect_with_deps(
            move |_| {
                let destructor = on_window_scroll(move || {
                    if let Some(current) = read_viewport() {
                        scroll.set(current);
                    }
                });
                move || destructor()
            },
            (),
        );
    }
    *scroll
}
