use crate::{traits::RenderSurface, CompassError, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// A `<canvas>` element and its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| render_error("getContext failed", &e))?
            .ok_or_else(|| CompassError::Render("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| CompassError::Render("not a 2d context".to_string()))?;
        Ok(Self { canvas, ctx })
    }

    /// Resize the backing store; clears the canvas as a side effect
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

fn render_error(context: &str, err: &JsValue) -> CompassError {
    CompassError::Render(format!("{context}: {err:?}"))
}

impl RenderSurface for CanvasSurface {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<()> {
        self.ctx
            .translate(x, y)
            .map_err(|e| render_error("translate failed", &e))
    }

    fn rotate(&mut self, radians: f64) -> Result<()> {
        self.ctx
            .rotate(radians)
            .map_err(|e| render_error("rotate failed", &e))
    }

    #[allow(deprecated)]
    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style(&JsValue::from_str(color));
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }
}
