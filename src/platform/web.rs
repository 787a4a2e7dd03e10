//! Browser glue: canvases, the text overlay and the settings block

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::StartupError;
use crate::ui::{DrawCommand, TextMeasure};

/// Look up a canvas element by id
pub fn canvas(document: &Document, id: &'static str) -> Result<HtmlCanvasElement, StartupError> {
    document
        .get_element_by_id(id)
        .ok_or(StartupError::MissingElement(id))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| StartupError::NotACanvas(id))
}

/// Text content of the inline settings block, if the page has one
pub fn settings_block(document: &Document, id: &str) -> Option<String> {
    document.get_element_by_id(id)?.text_content()
}

fn css_font(size: f32) -> String {
    format!("{size}px monospace")
}

fn css_color(color: [f32; 4]) -> String {
    let [r, g, b, a] = color.map(|c| c.clamp(0.0, 1.0));
    format!(
        "rgba({}, {}, {}, {a})",
        (r * 255.0).round(),
        (g * 255.0).round(),
        (b * 255.0).round()
    )
}

/// 2D canvas stacked on top of the WebGPU canvas, used for text only
pub struct TextOverlay {
    ctx: CanvasRenderingContext2d,
}

impl TextOverlay {
    pub fn new(canvas: &HtmlCanvasElement, id: &'static str) -> Result<Self, StartupError> {
        canvas.set_width(SCREEN_WIDTH as u32);
        canvas.set_height(SCREEN_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(StartupError::NoTextContext(id))?;
        ctx.set_text_baseline("top");

        Ok(Self { ctx })
    }

    /// Clear and draw every text run of the frame
    pub fn draw(&self, frame: &[DrawCommand]) {
        self.ctx
            .clear_rect(0.0, 0.0, SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64);

        for cmd in frame {
            if let DrawCommand::Text {
                text,
                pos,
                size,
                color,
            } = cmd
            {
                self.ctx.set_font(&css_font(*size));
                self.ctx.set_fill_style_str(&css_color(*color));
                if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
                    log::warn!("fill_text failed: {e:?}");
                }
            }
        }
    }
}

impl TextMeasure for TextOverlay {
    fn measure(&self, text: &str, size: f32) -> f32 {
        self.ctx.set_font(&css_font(size));
        match self.ctx.measure_text(text) {
            Ok(metrics) => metrics.width() as f32,
            Err(e) => {
                log::warn!("measure_text failed: {e:?}");
                0.0
            }
        }
    }
}
