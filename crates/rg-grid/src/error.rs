//! Grid-subsystem error type.

use thiserror::Error;

use rg_core::Cell;

/// Errors produced by `rg-grid`.
///
/// An unreachable goal is *not* an error: solvers return an empty
/// [`Path`](crate::Path) for it.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("cell {0} is not a node of the grid graph")]
    InvalidNode(Cell),

    #[error("cell {cell} lies outside the {size}x{size} grid")]
    OutOfBounds { cell: Cell, size: u32 },

    #[error("invalid grid: {0}")]
    InvalidGrid(String),
}

pub type GridResult<T> = Result<T, GridError>;
