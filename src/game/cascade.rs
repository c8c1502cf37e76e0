//! Cascade resolver: remove matched blocks, drop survivors, refill the holes.

use rand::Rng;

use super::BLOCK_REWARD;
use super::anim::Animation;
use super::grid::{Color, Grid};
use super::matches::MatchRun;
use super::state::GameState;

/// One full resolution pass over an already-detected match list. The three
/// phases run back to back; nothing outside this call observes a partial
/// board, only the destruction animations queued along the way.
///
/// New runs created by the random refill are left for a later tick, once the
/// destruction animations have drained.
pub fn resolve_cascade(state: &mut GameState, matches: &[MatchRun]) {
    remove_matches(state, matches);
    drop_blocks(&mut state.grid);
    fill_spaces(&mut state.grid, &mut state.rng);
}

/// Empties every cell of every match, queueing a shrink animation per block
/// actually removed and crediting the flat reward per cell per record. A
/// cell shared by overlapping records is removed once but scored once per
/// record, which is the documented scoring quirk.
fn remove_matches(state: &mut GameState, matches: &[MatchRun]) {
    for run in matches {
        for (x, y) in run.cells() {
            if let Some(color) = state.grid.take(x, y) {
                state.animations.push(Animation::destruction((x, y), color));
            }
            state.score += BLOCK_REWARD;
        }
    }
}

/// Gravity: per column, every empty cell pulls down the nearest block above
/// it, compacting blocks toward the bottom without reordering them and
/// leaving the empties at the top.
pub fn drop_blocks(grid: &mut Grid) {
    for x in 0..grid.cols() {
        for y in (0..grid.rows()).rev() {
            if grid.get(x, y).is_some() {
                continue;
            }
            let mut n = y;
            while n > 0 && grid.get(x, n).is_none() {
                n -= 1;
            }
            // n is the nearest occupied cell above, or row 0 (possibly empty,
            // in which case this whole column segment is already compact).
            grid.set(x, y, grid.get(x, n));
            grid.set(x, n, None);
        }
    }
}

/// Refill: every remaining hole gets a fresh uniform draw from the palette.
pub fn fill_spaces<R: Rng>(grid: &mut Grid, rng: &mut R) {
    for x in 0..grid.cols() {
        for y in 0..grid.rows() {
            if grid.get(x, y).is_none() {
                grid.set(x, y, Some(Color::random(rng)));
            }
        }
    }
}
