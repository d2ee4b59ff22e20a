//! Solver result type.

use rg_core::Cell;

/// A route from start to goal, endpoints included.
///
/// An empty `cells` vector means the goal is unreachable from the start.
/// That is a normal result, distinct from
/// [`GridError::InvalidNode`](crate::GridError::InvalidNode).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    /// Cells in travel order.
    pub cells: Vec<Cell>,
    /// Sum of edge weights along `cells`.  `0.0` when unreachable.
    pub cost: f64,
}

impl Path {
    /// The "no route" result.
    pub fn unreachable() -> Self {
        Self { cells: Vec::new(), cost: 0.0 }
    }

    /// Zero-length route for `start == goal`.
    pub fn trivial(cell: Cell) -> Self {
        Self { cells: vec![cell], cost: 0.0 }
    }

    #[inline]
    pub fn is_unreachable(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells on the path, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves (edges) along the path.
    #[inline]
    pub fn hops(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub fn goal(&self) -> Option<Cell> {
        self.cells.last().copied()
    }
}

/// Walk the predecessor array back from `goal` and reverse.
///
/// `prev[slot]` is `None` for the start cell (and for unvisited cells), so the
/// walk stops exactly at the start.
pub(crate) fn reconstruct(prev: &[Option<Cell>], goal: Cell, cost: f64, n: u32) -> Path {
    let mut cells = vec![goal];
    let mut cur = goal;
    while let Some(p) = prev[cur.index(n)] {
        cells.push(p);
        cur = p;
    }
    cells.reverse();
    Path { cells, cost }
}
