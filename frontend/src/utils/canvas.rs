use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement};

use crate::detection::{Annotation, Surface};

const MARKER_COLOR: &str = "#F5DF4D";

/// Paints the live video frame plus the current annotation onto the overlay
/// canvas.
pub struct OverlayPainter {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl OverlayPainter {
    pub fn attach(canvas: HtmlCanvasElement) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, context })
    }

    pub fn surface(&self) -> Surface {
        Surface {
            width: f64::from(self.canvas.width()),
            height: f64::from(self.canvas.height()),
        }
    }

    pub fn paint(&self, video: &HtmlVideoElement, annotation: Option<&Annotation>) {
        let Surface { width, height } = self.surface();
        self.context.clear_rect(0.0, 0.0, width, height);
        if let Err(e) = self
            .context
            .draw_image_with_html_video_element_and_dw_and_dh(video, 0.0, 0.0, width, height)
        {
            log::debug!("skipping frame, video not ready: {:?}", e);
        }

        let Some(mark) = annotation else {
            return;
        };
        self.context.set_stroke_style_str(MARKER_COLOR);
        self.context.set_line_width(2.0);
        self.context.stroke_rect(mark.x, mark.y, mark.width, mark.height);
        self.context.set_fill_style_str(MARKER_COLOR);
        self.context.set_font("14px sans-serif");
        if let Err(e) = self.context.fill_text(&mark.label, mark.x, mark.y - 5.0) {
            log::debug!("failed to draw marker label: {:?}", e);
        }
    }
}
