//! 2D canvas surface
//!
//! Replays `DrawCommand`s from the simulation on a `CanvasRenderingContext2d`.

use std::f64::consts::TAU;

use game_core::DrawCommand;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::error::ClientError;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up a canvas by element id and take its 2D context
    pub fn from_id(document: &Document, id: &str) -> Result<Self, ClientError> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| ClientError::CanvasNotFound(id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ClientError::NotACanvas(id.to_string()))?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or(ClientError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ClientError::ContextUnavailable)?;

        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Backing size in canvas pixels
    pub fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    pub fn draw(&self, commands: &[DrawCommand]) -> Result<(), ClientError> {
        for command in commands {
            self.draw_one(command)?;
        }
        Ok(())
    }

    fn draw_one(&self, command: &DrawCommand) -> Result<(), ClientError> {
        let ctx = &self.ctx;
        match command {
            DrawCommand::Clear { width, height } => {
                ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
            }
            DrawCommand::DashedLine {
                from,
                to,
                dash,
                color,
            } => {
                let pattern = js_sys::Array::of2(
                    &JsValue::from_f64(dash[0] as f64),
                    &JsValue::from_f64(dash[1] as f64),
                );
                ctx.set_line_dash(&pattern)?;
                ctx.set_stroke_style_str(color);
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.stroke();
                // Solid lines for anything drawn afterwards
                ctx.set_line_dash(&js_sys::Array::new())?;
            }
            DrawCommand::FillRect { pos, size, color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
            }
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => {
                ctx.set_fill_style_str(color);
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                ctx.close_path();
                ctx.fill();
            }
        }
        Ok(())
    }
}
