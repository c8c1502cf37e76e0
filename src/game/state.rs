//! Game state and the per-tick update that drives it.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::anim::{Animation, advance_animations};
use super::cascade::resolve_cascade;
use super::grid::Grid;
use super::matches::find_matches;
use super::swap::{SelectedBlock, handle_click};
use super::{CELL_SIZE, COLS, ROWS};

/// The whole mutable game state, owned by the frame loop and handed by
/// mutable reference into each component. Seeded explicitly so a test (or a
/// replay) gets the exact same board and refills every run.
#[derive(Clone, Debug)]
pub struct GameState {
    pub grid: Grid,
    pub selected: Option<SelectedBlock>,
    pub animations: Vec<Animation>,
    pub score: u32,
    pub rng: SmallRng,
    pending_clicks: Vec<(f64, f64)>,
}

impl GameState {
    /// A fresh 8×8 board with every cell drawn from the palette. The initial
    /// board may contain runs; the first few ticks sweep them away (and score
    /// them), same as the cascades they are.
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let grid = Grid::random(ROWS, COLS, &mut rng);
        Self {
            grid,
            selected: None,
            animations: Vec::new(),
            score: 0,
            rng,
            pending_clicks: Vec::new(),
        }
    }

    /// Queues a canvas-space click for the next tick. Safe to call from an
    /// event listener: nothing is mutated beyond the queue, keeping the
    /// update phase the sole writer of game state.
    pub fn push_click(&mut self, px: f64, py: f64) {
        self.pending_clicks.push((px, py));
    }
}

/// One engine tick.
///
/// Queued clicks are drained first — selection and swapping stay responsive
/// even while animations play. Then either the animation set advances one
/// step, or, with no animation alive, at most one resolution pass runs:
/// animations and gameplay logic never move in the same tick, which is the
/// hand-off that lets a cascade play out visibly stage by stage.
pub fn update(state: &mut GameState) {
    let clicks = std::mem::take(&mut state.pending_clicks);
    for (px, py) in clicks {
        if px < 0.0 || py < 0.0 {
            continue;
        }
        let x = (px / CELL_SIZE as f64) as usize;
        let y = (py / CELL_SIZE as f64) as usize;
        handle_click(state, x, y);
    }

    if !state.animations.is_empty() {
        advance_animations(&mut state.animations);
    } else {
        let matches = find_matches(&state.grid);
        if !matches.is_empty() {
            resolve_cascade(state, &matches);
        }
    }
}
