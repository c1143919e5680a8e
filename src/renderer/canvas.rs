//! Canvas 2D backend (WASM only)

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::{DrawCommand, FrameOptions, build_frame};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::error::WebError;
use crate::platform::dom;
use crate::sim::GameState;

/// Owns the canvas and its 2D context
pub struct CanvasRenderState {
    pub canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub options: FrameOptions,
}

impl CanvasRenderState {
    /// Attach to the canvas with the given id and size it to the logical
    /// playfield
    pub fn new(canvas_id: &str, options: FrameOptions) -> Result<Self, WebError> {
        let canvas: HtmlCanvasElement = dom::element_as(canvas_id)?;
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| WebError::Js("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| WebError::WrongElementType(canvas_id.to_string()))?;

        Ok(Self {
            canvas,
            ctx,
            options,
        })
    }

    /// Draw the current frame
    pub fn render(&self, state: &GameState) {
        for command in build_frame(state, self.options) {
            self.execute(&command);
        }
    }

    fn execute(&self, command: &DrawCommand) {
        let ctx = &self.ctx;
        match command {
            DrawCommand::Clear { width, height } => {
                ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
            }
            DrawCommand::FillRect { pos, size, color } => {
                ctx.set_fill_style_str(&color.css());
                ctx.fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
            }
            DrawCommand::FillText {
                text,
                pos,
                font,
                color,
            } => {
                ctx.set_fill_style_str(&color.css());
                ctx.set_font(font);
                if let Err(e) = ctx.fill_text(text, pos.x as f64, pos.y as f64) {
                    log::warn!("fill_text failed: {:?}", e);
                }
            }
        }
    }
}
