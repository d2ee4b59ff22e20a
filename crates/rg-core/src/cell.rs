//! Grid coordinate type.
//!
//! A `Cell` is both the unit of position and the identity of a graph node.
//! The derived `Ord` is row-major (`row`, then `col`); solvers use it as the
//! secondary heap key so that equal-cost ties resolve the same way every run.

use std::fmt;

use rustc_hash::FxHashSet;

/// Set of cells, used for obstacle maps.  FxHash is plenty for small integer
/// keys and much faster than SipHash on the graph-build hot path.
pub type CellSet = FxHashSet<Cell>;

/// An integer grid coordinate `(row, col)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// `true` if the cell lies inside an `n × n` grid.
    #[inline]
    pub fn in_bounds(self, n: u32) -> bool {
        self.row < n && self.col < n
    }

    /// The cell displaced by `(d_row, d_col)`, or `None` if that would leave
    /// the `n × n` grid.
    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32, n: u32) -> Option<Cell> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let cell = Cell { row, col };
        cell.in_bounds(n).then_some(cell)
    }

    /// Straight-line distance to `other`, in cell widths.
    #[inline]
    pub fn distance(self, other: Cell) -> f64 {
        let dr = self.row as f64 - other.row as f64;
        let dc = self.col as f64 - other.col as f64;
        (dr * dr + dc * dc).sqrt()
    }

    /// Row-major dense index into an `n × n` array.
    #[inline(always)]
    pub fn index(self, n: u32) -> usize {
        self.row as usize * n as usize + self.col as usize
    }

    /// Inverse of [`index`](Self::index).
    #[inline(always)]
    pub fn from_index(i: usize, n: u32) -> Cell {
        let n = n as usize;
        Cell { row: (i / n) as u32, col: (i % n) as u32 }
    }
}

impl From<(u32, u32)> for Cell {
    fn from((row, col): (u32, u32)) -> Self {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
