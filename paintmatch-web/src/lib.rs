//! Browser boundary for the paint-matching game: the wasm-bindgen handle the
//! UI drives, localStorage persistence, and console logging setup.

pub mod game;
pub mod persistence;

pub use game::PaintMatchGame;
pub use persistence::{clear_session, load_session, save_session, PersistedSession};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);
}
