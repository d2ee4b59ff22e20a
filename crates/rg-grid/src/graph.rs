//! Obstacle grid graph.
//!
//! # Data layout
//!
//! Every cell of the `n × n` grid has a dense row-major slot
//! (`Cell::index(n)`).  Outgoing edges use **Compressed Sparse Row** format:
//! the edges of the cell in slot `i` occupy
//!
//! ```text
//! edge_to[ node_out_start[i] .. node_out_start[i+1] ]
//! ```
//!
//! Obstacle slots have an empty range and `free[i] == false`, so they are
//! never nodes and never appear as an edge target.  Edge ranges follow the
//! fixed [`DIRECTIONS`] order, which only matters for tie-breaking.

use std::borrow::Borrow;

use rg_core::Cell;
use tracing::debug;

use crate::{GridError, GridResult};

/// The 8-neighbourhood, in enumeration order.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Largest supported side length.  Keeps the CSR offsets within `u32`
/// (at most `8 · n²` edges).
pub const MAX_SIZE: u32 = 16_384;

// ── GridGraph ─────────────────────────────────────────────────────────────────

/// Navigable graph over the free cells of an `n × n` grid.
///
/// Immutable once built; `Sync`, so a single instance is shared read-only by
/// concurrent path queries.
#[derive(Clone, Debug)]
pub struct GridGraph {
    size: u32,

    /// `false` for obstacle slots.  Indexed by `Cell::index(size)`.
    free: Vec<bool>,

    /// Number of `true` entries in `free`.
    node_count: usize,

    /// CSR row pointer.  Length = `size² + 1`.
    node_out_start: Vec<u32>,

    /// Destination cell of each edge.
    edge_to: Vec<Cell>,

    /// Euclidean length of each edge: 1 orthogonal, √2 diagonal.
    edge_weight: Vec<f64>,
}

impl GridGraph {
    /// Build the graph for an `n × n` grid with the given obstacles.
    ///
    /// An empty obstacle set is fine, and so is a grid with no free cell (the
    /// graph is then simply empty).  Duplicate obstacles are ignored.
    ///
    /// Time and space: O(n²).
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidGrid`] if `n == 0` or `n > MAX_SIZE`.
    /// - [`GridError::OutOfBounds`] if an obstacle lies outside the grid.
    ///
    /// # Example
    ///
    /// ```
    /// use rg_core::Cell;
    /// use rg_grid::GridGraph;
    ///
    /// let graph = GridGraph::build(3, [Cell::new(1, 1)]).unwrap();
    /// assert_eq!(graph.node_count(), 8);
    /// assert!(!graph.contains(Cell::new(1, 1)));
    /// // The corner loses its diagonal neighbour to the obstacle.
    /// assert_eq!(graph.neighbors(Cell::new(0, 0)).count(), 2);
    /// ```
    pub fn build<I>(n: u32, obstacles: I) -> GridResult<Self>
    where
        I: IntoIterator,
        I::Item: Borrow<Cell>,
    {
        if n == 0 || n > MAX_SIZE {
            return Err(GridError::InvalidGrid(format!(
                "side length must be in 1..={MAX_SIZE}, got {n}"
            )));
        }

        let slots = n as usize * n as usize;
        let mut free = vec![true; slots];
        for obstacle in obstacles {
            let cell = *obstacle.borrow();
            if !cell.in_bounds(n) {
                return Err(GridError::OutOfBounds { cell, size: n });
            }
            free[cell.index(n)] = false;
        }
        let node_count = free.iter().filter(|&&f| f).count();

        let mut node_out_start = Vec::with_capacity(slots + 1);
        let mut edge_to        = Vec::with_capacity(node_count * DIRECTIONS.len());
        let mut edge_weight    = Vec::with_capacity(node_count * DIRECTIONS.len());
        node_out_start.push(0u32);

        for (i, &is_free) in free.iter().enumerate() {
            if is_free {
                let cell = Cell::from_index(i, n);
                for &(dr, dc) in &DIRECTIONS {
                    let Some(next) = cell.offset(dr, dc, n) else {
                        continue;
                    };
                    if !free[next.index(n)] {
                        continue;
                    }
                    edge_to.push(next);
                    edge_weight.push(cell.distance(next));
                }
            }
            node_out_start.push(edge_to.len() as u32);
        }

        debug!(
            size = n,
            nodes = node_count,
            edges = edge_to.len(),
            obstacles = slots - node_count,
            "grid graph built"
        );

        Ok(Self { size: n, free, node_count, node_out_start, edge_to, edge_weight })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Side length `n`.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of dense slots (`n²`); the length solvers use for their
    /// per-cell arrays.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.free.len()
    }

    /// Number of free cells (graph nodes).
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    // ── Membership ────────────────────────────────────────────────────────

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.in_bounds(self.size)
    }

    /// `true` if `cell` is a node: in bounds and not an obstacle.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.free[cell.index(self.size)]
    }

    /// `true` if `cell` is in bounds and blocked.
    #[inline]
    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.free[cell.index(self.size)]
    }

    /// `Ok(())` if `cell` is a node, [`GridError::InvalidNode`] otherwise.
    pub fn check_node(&self, cell: Cell) -> GridResult<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(GridError::InvalidNode(cell))
        }
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// `(neighbour, weight)` pairs of `cell` in [`DIRECTIONS`] order.
    ///
    /// Empty for obstacles and out-of-bounds cells.  Contiguous slice scan,
    /// no allocation.
    #[inline]
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = (Cell, f64)> + '_ {
        let range = if self.in_bounds(cell) {
            let i = cell.index(self.size);
            self.node_out_start[i] as usize..self.node_out_start[i + 1] as usize
        } else {
            0..0
        };
        self.edge_to[range.clone()]
            .iter()
            .copied()
            .zip(self.edge_weight[range].iter().copied())
    }

    /// Out-degree of `cell`.
    #[inline]
    pub fn degree(&self, cell: Cell) -> usize {
        if !self.in_bounds(cell) {
            return 0;
        }
        let i = cell.index(self.size);
        (self.node_out_start[i + 1] - self.node_out_start[i]) as usize
    }

    /// All free cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let n = self.size;
        self.free
            .iter()
            .enumerate()
            .filter(|(_, f)| **f)
            .map(move |(i, _)| Cell::from_index(i, n))
    }
}
