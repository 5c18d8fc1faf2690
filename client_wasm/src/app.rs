//! Frame loop driver
//!
//! Owns the `Simulation` and the canvas, runs one tick and one draw per
//! animation frame, and feeds pointer moves into the player paddle.

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Config, Simulation};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::canvas::CanvasSurface;
use crate::error::ClientError;
use crate::input::pointer_to_field_y;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct GameLoop {
    sim: Simulation,
    surface: CanvasSurface,
}

impl GameLoop {
    pub fn new(surface: CanvasSurface, seed: u64) -> Result<Self, ClientError> {
        let (width, height) = surface.size();
        let config = Config::with_arena(width as f32, height as f32);
        if !config.fits_arena() {
            return Err(ClientError::CanvasTooSmall { width, height });
        }

        Ok(Self {
            sim: Simulation::new(config, seed),
            surface,
        })
    }

    /// Update, then render
    pub fn frame(&mut self) -> Result<(), ClientError> {
        self.sim.tick();

        if let Some(side) = self.sim.events.rally_reset {
            console_log!(
                "tick {}: ball left past the {:?} edge, rally reset",
                self.sim.tick,
                side
            );
        }

        self.surface.draw(&self.sim.frame())
    }

    pub fn on_pointer_move(&mut self, event: &MouseEvent) {
        let rect = self.surface.canvas().get_bounding_client_rect();
        let y = pointer_to_field_y(
            event.client_y() as f64,
            rect.top(),
            rect.height(),
            self.sim.field.height,
        );
        self.sim.set_player_center(y);
    }
}

/// Set up the game on the canvas with the given id and start the loop
pub fn start(canvas_id: &str) -> Result<(), ClientError> {
    let window = web_sys::window().ok_or(ClientError::NoWindow)?;
    let document = window.document().ok_or(ClientError::NoDocument)?;
    let surface = CanvasSurface::from_id(&document, canvas_id)?;
    let canvas = surface.canvas().clone();

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64 ^ js_sys::Date::now() as u64;
    let (width, height) = surface.size();
    let game = Rc::new(RefCell::new(GameLoop::new(surface, seed)?));
    console_log!("pong: canvas #{canvas_id} {width}x{height}, seed {seed}");

    // Pointer observer; runs between frames on the same thread
    let pointer_game = game.clone();
    let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        pointer_game.borrow_mut().on_pointer_move(&event);
    });
    canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    run_frames(game)
}

/// Drive `GameLoop::frame` from `requestAnimationFrame`, one tick per frame
fn run_frames(game: Rc<RefCell<GameLoop>>) -> Result<(), ClientError> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();

    *callback.borrow_mut() = Some(Closure::new(move || {
        if let Err(e) = game.borrow_mut().frame() {
            console_error!("frame failed: {e}");
        }
        if let Err(e) = request_frame(&next) {
            console_error!("could not schedule next frame: {e}");
        }
    }));

    request_frame(&callback)
}

fn request_frame(callback: &FrameCallback) -> Result<(), ClientError> {
    let window = web_sys::window().ok_or(ClientError::NoWindow)?;
    if let Some(closure) = callback.borrow().as_ref() {
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    }
    Ok(())
}
