//! Grid model: the fixed color palette and the row-major board container.

use rand::Rng;

/// One of the six block colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Orange,
}

impl Color {
    /// Full palette, in the order blocks are sampled from it.
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Cyan,
        Color::Orange,
    ];

    /// Uniform draw from the palette.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// CSS color used by the canvas renderer for this block.
    pub fn css(self) -> &'static str {
        match self {
            Color::Red => "#ef4444",
            Color::Green => "#22c55e",
            Color::Blue => "#3b82f6",
            Color::Yellow => "#eab308",
            Color::Cyan => "#06b6d4",
            Color::Orange => "#f97316",
        }
    }
}

/// A board cell: a colored block, or empty.
pub type Cell = Option<Color>;

/// Row-major board of cells, indexed `(x, y)` with `x` the column and `y` the
/// row, `(0, 0)` top-left. Gameplay uses a fixed 8×8 board; the dimensions
/// stay parametric so tests can build single columns and small grids.
///
/// Reads outside the board return `None` and writes outside it are dropped;
/// in-bounds indexing is still debug-asserted because callers are expected to
/// stay on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-empty grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![None; rows * cols],
        }
    }

    /// A grid with every cell drawn independently and uniformly from the
    /// palette. Planted runs of 3+ are possible and are swept away by the
    /// first resolution passes, exactly as live gameplay would.
    pub fn random<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let mut grid = Self::new(rows, cols);
        for cell in &mut grid.cells {
            *cell = Some(Color::random(rng));
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(self.in_bounds(x, y), "cell ({x},{y}) off the board");
        y * self.cols + x
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells[self.idx(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if !self.in_bounds(x, y) {
            return;
        }
        let idx = self.idx(x, y);
        self.cells[idx] = cell;
    }

    /// Empties the cell and returns what was in it. Taking an already-empty
    /// cell is a no-op that returns `None`, which is what makes removal of
    /// overlapping matches idempotent.
    pub fn take(&mut self, x: usize, y: usize) -> Cell {
        if !self.in_bounds(x, y) {
            return None;
        }
        let idx = self.idx(x, y);
        self.cells[idx].take()
    }

    /// Exchanges the contents of two cells.
    pub fn swap_cells(&mut self, a: (usize, usize), b: (usize, usize)) {
        if !self.in_bounds(a.0, a.1) || !self.in_bounds(b.0, b.1) {
            return;
        }
        let ia = self.idx(a.0, a.1);
        let ib = self.idx(b.0, b.1);
        self.cells.swap(ia, ib);
    }
}
