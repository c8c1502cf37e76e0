//! Block Crush core crate.
//!
//! An 8×8 match-3: click a block to select it, click an orthogonal neighbour
//! to swap, runs of three or more matching colors cascade away for points.
//! The game engine (grid, match scanner, cascade resolver, swap controller,
//! animation scheduler) lives in [`game`] and is pure Rust so it runs under
//! native `cargo test`; the browser glue (canvas, click listener, frame loop)
//! is confined to `game::start_match_mode` and only does anything useful
//! inside a browser.

use wasm_bindgen::prelude::*;

pub mod game;

pub use game::anim::Animation;
pub use game::grid::{Cell, Color, Grid};
pub use game::matches::{MatchRun, find_matches};
pub use game::state::{GameState, update};
pub use game::swap::SelectedBlock;
pub use game::{ANIMATION_STEPS, BLOCK_REWARD, CELL_SIZE, COLS, ROWS};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Entry point called from JS once the page is ready. Builds the canvas and
/// overlays, seeds the engine, and starts the frame loop.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    game::start_match_mode()
}
