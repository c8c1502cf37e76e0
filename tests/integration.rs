// Tick-flow tests for the match-3 engine (native): selection state machine,
// swap commit/revert, animation gating of resolution. Clicks go through the
// same pixel-space entry the browser glue uses, and every tick is one call to
// `update`, exactly what the frame loop issues per animation frame.

use block_crush::game::cascade::resolve_cascade;
use block_crush::{
    ANIMATION_STEPS, Animation, CELL_SIZE, Cell, Color, GameState, Grid, SelectedBlock,
    find_matches, update,
};

fn cell(ch: char) -> Cell {
    match ch {
        'R' => Some(Color::Red),
        'G' => Some(Color::Green),
        'B' => Some(Color::Blue),
        'Y' => Some(Color::Yellow),
        'C' => Some(Color::Cyan),
        'O' => Some(Color::Orange),
        '.' => None,
        other => panic!("unknown cell char {other:?}"),
    }
}

fn grid_of(rows: &[&str]) -> Grid {
    let mut grid = Grid::new(rows.len(), rows[0].len());
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            grid.set(x, y, cell(ch));
        }
    }
    grid
}

/// 8×8 board with no run of three anywhere, horizontal or vertical.
fn quiet_board() -> Grid {
    grid_of(&[
        "RGBRGBRG", //
        "YCOYCOYC",
        "RGBRGBRG",
        "YCOYCOYC",
        "RGBRGBRG",
        "YCOYCOYC",
        "RGBRGBRG",
        "YCOYCOYC",
    ])
}

fn state_with(grid: Grid) -> GameState {
    let mut state = GameState::new(0);
    state.grid = grid;
    state.animations.clear();
    state.score = 0;
    state
}

/// Queues a click at the center of cell `(x, y)` in canvas pixels.
fn click(state: &mut GameState, x: usize, y: usize) {
    let half = CELL_SIZE as f64 / 2.0;
    state.push_click(x as f64 * CELL_SIZE as f64 + half, y as f64 * CELL_SIZE as f64 + half);
}

fn drain_animations(state: &mut GameState) {
    let mut ticks = 0;
    while !state.animations.is_empty() {
        update(state);
        ticks += 1;
        assert!(ticks <= ANIMATION_STEPS + 1, "animations never drained");
    }
}

#[test]
fn first_click_always_selects_and_never_swaps() {
    let mut state = state_with(quiet_board());
    let before = state.grid.clone();

    click(&mut state, 2, 3);
    update(&mut state);

    assert_eq!(
        state.selected,
        Some(SelectedBlock {
            x: 2,
            y: 3,
            color: before.get(2, 3),
        })
    );
    assert_eq!(state.grid, before);
    assert!(state.animations.is_empty());
    assert_eq!(state.score, 0);
}

#[test]
fn non_adjacent_click_clears_selection_without_touching_the_grid() {
    let mut state = state_with(quiet_board());
    let before = state.grid.clone();

    click(&mut state, 2, 3);
    update(&mut state);
    click(&mut state, 5, 5);
    update(&mut state);

    assert_eq!(state.selected, None);
    assert_eq!(state.grid, before);
    assert!(state.animations.is_empty());
}

#[test]
fn reclicking_the_selected_cell_clears_the_selection() {
    let mut state = state_with(quiet_board());

    click(&mut state, 4, 4);
    update(&mut state);
    click(&mut state, 4, 4);
    update(&mut state);

    assert_eq!(state.selected, None);
    assert!(state.animations.is_empty());
}

#[test]
fn clicks_off_the_board_are_ignored() {
    let mut state = state_with(quiet_board());

    state.push_click(-5.0, 32.0);
    state.push_click(1000.0, 32.0);
    state.push_click(32.0, 1000.0);
    update(&mut state);

    assert_eq!(state.selected, None);
}

#[test]
fn adjacent_swap_that_matches_commits_and_cascades() {
    // Swapping (2,0) and (3,0) turns row 0 into RRRG…, a run of three.
    let mut board = quiet_board();
    board.set(0, 0, Some(Color::Red));
    board.set(1, 0, Some(Color::Red));
    board.set(2, 0, Some(Color::Green));
    board.set(3, 0, Some(Color::Red));
    let mut state = state_with(board);
    assert!(find_matches(&state.grid).is_empty());

    click(&mut state, 2, 0);
    update(&mut state);
    click(&mut state, 3, 0);
    update(&mut state);

    // Swap committed instantly; the slide pair is in flight; resolution is
    // still gated behind it.
    assert_eq!(state.grid.get(2, 0), Some(Color::Red));
    assert_eq!(state.grid.get(3, 0), Some(Color::Green));
    assert_eq!(state.selected, None);
    assert_eq!(state.animations.len(), 2);
    assert!(
        state
            .animations
            .iter()
            .all(|a| matches!(a, Animation::Swap { .. }))
    );
    assert_eq!(state.score, 0);

    drain_animations(&mut state);
    update(&mut state);

    // One resolution pass: three blocks gone, three shrink effects, 30 points.
    assert_eq!(state.score, 30);
    let destroyed = state
        .animations
        .iter()
        .filter(|a| matches!(a, Animation::Destruction { .. }))
        .count();
    assert_eq!(destroyed, 3);
    for y in 0..state.grid.rows() {
        for x in 0..state.grid.cols() {
            assert!(state.grid.get(x, y).is_some(), "hole left at ({x},{y})");
        }
    }
}

#[test]
fn adjacent_swap_without_match_reverts_the_grid() {
    let mut state = state_with(quiet_board());
    let before = state.grid.clone();

    click(&mut state, 0, 0);
    update(&mut state);
    click(&mut state, 1, 0);
    update(&mut state);

    // Reverted on the spot; the queued slides play out as a snap-back.
    assert_eq!(state.grid, before);
    assert_eq!(state.selected, None);
    assert_eq!(state.animations.len(), 2);

    drain_animations(&mut state);
    update(&mut state);
    assert_eq!(state.grid, before);
    assert_eq!(state.score, 0);
}

#[test]
fn selection_still_works_while_animations_play() {
    let mut state = state_with(quiet_board());
    state
        .animations
        .push(Animation::destruction((0, 0), Color::Red));

    click(&mut state, 2, 3);
    update(&mut state);

    assert!(state.selected.is_some());
    assert_eq!(state.animations.len(), 1, "destruction should still be alive");
}

#[test]
fn resolution_waits_for_the_animation_set_to_drain() {
    // Board with a live run of four on row 0, plus a lingering animation.
    let mut board = quiet_board();
    for x in 0..3 {
        board.set(x, 0, Some(Color::Red));
    }
    let mut state = state_with(board);
    let matched = state.grid.clone();
    assert!(!find_matches(&state.grid).is_empty());

    state.animations.push(Animation::swap((0, 0), (1, 0)));

    // While the slide lives, the run survives untouched.
    for _ in 0..ANIMATION_STEPS - 1 {
        update(&mut state);
        assert_eq!(state.grid, matched);
        assert_eq!(state.score, 0);
    }
    drain_animations(&mut state);
    assert_eq!(state.grid, matched);

    // First unanimated tick resolves: RRRR scores two overlapping records.
    update(&mut state);
    assert_eq!(state.score, 60);
}

#[test]
fn seeded_boards_are_reproducible() {
    assert_eq!(GameState::new(7).grid, GameState::new(7).grid);
    assert_ne!(GameState::new(7).grid, GameState::new(8).grid);
}

#[test]
fn fresh_board_settles_to_full_and_matchless() {
    let mut state = GameState::new(3);
    let mut ticks = 0;
    loop {
        update(&mut state);
        ticks += 1;
        assert!(ticks < 100_000, "board never stabilized");
        if state.animations.is_empty() && find_matches(&state.grid).is_empty() {
            break;
        }
    }
    for y in 0..state.grid.rows() {
        for x in 0..state.grid.cols() {
            assert!(state.grid.get(x, y).is_some(), "hole left at ({x},{y})");
        }
    }
}

#[test]
fn cascade_of_a_planted_run_feeds_the_next_pass_only_after_refill() {
    // Direct engine-level cascade: the pass itself is atomic, holes never
    // escape it.
    let mut state = state_with(quiet_board());
    state.grid.set(0, 7, Some(Color::Red));
    state.grid.set(1, 7, Some(Color::Red));
    state.grid.set(2, 7, Some(Color::Red));

    let matches = find_matches(&state.grid);
    assert_eq!(matches.len(), 1);
    resolve_cascade(&mut state, &matches);

    assert_eq!(state.score, 30);
    for y in 0..state.grid.rows() {
        for x in 0..state.grid.cols() {
            assert!(state.grid.get(x, y).is_some(), "hole left at ({x},{y})");
        }
    }
}
