//! Browser client for canvas Pong
//!
//! Looks up the canvas, wires the pointer observer and drives the
//! `game_core` simulation from `requestAnimationFrame`.

#[macro_use]
mod log;

pub mod error;
pub mod input;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Start the game on the canvas with the given element id
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    app::start(canvas_id).map_err(JsValue::from)
}
