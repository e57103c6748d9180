use web_sys::Element;
use yew::prelude::*;

use super::scroll::on_window_scroll;

/// Whether an element whose top edge sits at `top` (relative to the viewport)
/// has scrolled far enough in to be revealed.
pub fn in_reveal_zone(top: f64, viewport_height: f64, threshold: f64) -> bool {
    top < viewport_height * (1.0 - threshold)
}

/// Latches to `true` once the referenced element enters the viewport.
#[hook]
pub fn use_reveal(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);
    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let destructor = on_window_scroll(move || {
                    let Some(element) = node.cast::<Element>() else {
                        return;
                    };
                    let Some(viewport_height) = web_sys::window()
                        .and_then(|w| w.inner_height().ok())
                        .and_then(|h| h.as_f64())
                    else {
                        return;
                    };
                    let top = element.get_bounding_client_rect().top();
                    if in_reveal_zone(top, viewport_height, threshold) {
                        revealed.set(true);
                    }
                });
                move || destructor()
            },
            (),
        );
    }
    (node, *revealed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_zone_respects_threshold() {
        assert!(in_reveal_zone(100.0, 800.0, 0.1));
        assert!(in_reveal_zone(719.0, 800.0, 0.1));
        assert!(!in_reveal_zone(720.0, 800.0, 0.1));
        assert!(!in_reveal_zone(1200.0, 800.0, 0.1));
        assert!(in_reveal_zone(-300.0, 800.0, 0.1));
    }
}
