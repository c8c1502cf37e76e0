//! Match scanner: finds runs of three equal colors along rows and columns.

use super::grid::Grid;

/// A detected run of three equal blocks starting at `(x, y)` and extending
/// right (`horizontal`) or down.
///
/// The scanner emits a record at every start position where three equal cells
/// line up, so a run of four produces two overlapping records (at `x` and
/// `x + 1`). Removal is idempotent per cell, but scoring credits every cell
/// of every record, so the shared cells of overlapping records score twice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchRun {
    pub x: usize,
    pub y: usize,
    pub len: usize,
    pub horizontal: bool,
}

impl MatchRun {
    /// The cells covered by this run, start first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len).map(move |i| {
            if self.horizontal {
                (self.x + i, self.y)
            } else {
                (self.x, self.y + i)
            }
        })
    }
}

/// Scans a static snapshot of the grid. Empty cells never participate in a
/// match, so a mid-cascade board full of holes reports nothing for them.
pub fn find_matches(grid: &Grid) -> Vec<MatchRun> {
    let mut matches = Vec::new();

    // horizontal
    for y in 0..grid.rows() {
        for x in 0..grid.cols().saturating_sub(2) {
            if let Some(color) = grid.get(x, y) {
                if grid.get(x + 1, y) == Some(color) && grid.get(x + 2, y) == Some(color) {
                    matches.push(MatchRun {
                        x,
                        y,
                        len: 3,
                        horizontal: true,
                    });
                }
            }
        }
    }

    // vertical
    for x in 0..grid.cols() {
        for y in 0..grid.rows().saturating_sub(2) {
            if let Some(color) = grid.get(x, y) {
                if grid.get(x, y + 1) == Some(color) && grid.get(x, y + 2) == Some(color) {
                    matches.push(MatchRun {
                        x,
                        y,
                        len: 3,
                        horizontal: false,
                    });
                }
            }
        }
    }

    matches
}
