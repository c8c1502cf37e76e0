//! Animation scheduler: transient visual effects advanced one step per tick.
//!
//! Both kinds run a fixed step budget ([`ANIMATION_STEPS`]) instead of
//! wall-clock time, which keeps the engine clock-free: a test drives exactly
//! as many ticks as it wants and the browser loop simply runs one step per
//! animation frame. While any animation is alive, gameplay resolution is
//! suspended (see `state::update`).

use super::grid::Color;
use super::{ANIMATION_STEPS, CELL_SIZE};

/// A transient visual effect attached to a board cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Animation {
    /// Slide of the block now held by `to`, drawn starting from `from` and
    /// converging on its own cell as `steps_remaining` drains. Purely
    /// visual: the grid contents were exchanged instantly at commit time.
    Swap {
        from: (usize, usize),
        to: (usize, usize),
        steps_remaining: u32,
        total_steps: u32,
    },
    /// Shrink of a just-removed block. The cell is logically empty for the
    /// whole duration, so the removed color rides along for the renderer.
    Destruction {
        cell: (usize, usize),
        color: Color,
        scale: f64,
        scale_step: f64,
    },
}

impl Animation {
    pub fn swap(from: (usize, usize), to: (usize, usize)) -> Self {
        Animation::Swap {
            from,
            to,
            steps_remaining: ANIMATION_STEPS,
            total_steps: ANIMATION_STEPS,
        }
    }

    pub fn destruction(cell: (usize, usize), color: Color) -> Self {
        Animation::Destruction {
            cell,
            color,
            scale: 1.0,
            scale_step: 1.0 / ANIMATION_STEPS as f64,
        }
    }

    /// Advances one step. Returns whether the animation is still alive.
    pub fn advance(&mut self) -> bool {
        match self {
            Animation::Swap {
                steps_remaining, ..
            } => {
                *steps_remaining = steps_remaining.saturating_sub(1);
                *steps_remaining > 0
            }
            Animation::Destruction {
                scale, scale_step, ..
            } => {
                *scale -= *scale_step;
                *scale > 0.0
            }
        }
    }
}

/// One scheduler step: every animation advances, exhausted ones drop out.
pub fn advance_animations(animations: &mut Vec<Animation>) {
    animations.retain_mut(Animation::advance);
}

/// Pixel offset to apply to the destination cell of an in-flight swap: the
/// block is drawn displaced back toward its origin, by one cell's distance at
/// the first step down to nothing at the last.
pub fn swap_draw_offset(
    from: (usize, usize),
    to: (usize, usize),
    steps_remaining: u32,
    total_steps: u32,
) -> (f64, f64) {
    let step_x = (to.0 as f64 - from.0 as f64) * CELL_SIZE as f64 / total_steps as f64;
    let step_y = (to.1 as f64 - from.1 as f64) * CELL_SIZE as f64 / total_steps as f64;
    (
        -step_x * steps_remaining as f64,
        -step_y * steps_remaining as f64,
    )
}

/// Pixel inset that keeps a shrinking block centered in its cell.
pub fn destruction_draw_inset(scale: f64) -> f64 {
    CELL_SIZE as f64 / 2.0 * (1.0 - scale)
}
