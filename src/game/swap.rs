//! Swap controller: the selection state machine and the swap attempt itself.

use super::anim::Animation;
use super::grid::Cell;
use super::matches::find_matches;
use super::state::GameState;

/// The single selected cell, if any, with the content seen at selection time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectedBlock {
    pub x: usize,
    pub y: usize,
    pub color: Cell,
}

/// A click that already passed the pixel→grid conversion.
///
/// No prior selection: the cell becomes selected, unconditionally; a first
/// click never swaps. With a selection, an orthogonally adjacent click
/// attempts the swap and anything else (including re-clicking the selected
/// cell) just drops the selection without touching the grid.
pub fn handle_click(state: &mut GameState, x: usize, y: usize) {
    if !state.grid.in_bounds(x, y) {
        return;
    }
    match state.selected.take() {
        None => {
            state.selected = Some(SelectedBlock {
                x,
                y,
                color: state.grid.get(x, y),
            });
        }
        Some(selected) => try_swap(state, selected, x, y),
    }
}

/// Attempts to swap the selected cell with `(x, y)`. The selection is already
/// consumed whatever happens next.
///
/// On an adjacent click the two cells exchange contents immediately and a
/// mirrored pair of slide animations is queued; the swap only sticks if it
/// produced at least one match, otherwise the grid reverts on the spot and
/// the queued slides play out as a snap-back.
fn try_swap(state: &mut GameState, selected: SelectedBlock, x: usize, y: usize) {
    let dx = selected.x.abs_diff(x);
    let dy = selected.y.abs_diff(y);
    if !((dx == 1 && dy == 0) || (dx == 0 && dy == 1)) {
        return;
    }

    let a = (selected.x, selected.y);
    let b = (x, y);
    state.grid.swap_cells(a, b);
    state.animations.push(Animation::swap(a, b));
    state.animations.push(Animation::swap(b, a));

    if find_matches(&state.grid).is_empty() {
        state.grid.swap_cells(a, b);
    }
}
