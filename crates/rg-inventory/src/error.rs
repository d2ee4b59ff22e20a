use std::fmt;

use rg_core::Cell;
use thiserror::Error;

/// Which roster an entity belongs to.  Sender and receiver names live in
/// separate namespaces.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EntityKind {
    Sender,
    Receiver,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Sender   => "sender",
            EntityKind::Receiver => "receiver",
        })
    }
}

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("the {kind} name {name:?} has already been taken")]
    NameTaken { kind: EntityKind, name: String },

    #[error("no {kind} named {name:?}")]
    UnknownName { kind: EntityKind, name: String },

    #[error("{kind} {name:?} at {cell} lies outside the {size}x{size} grid")]
    OutOfBounds { kind: EntityKind, name: String, cell: Cell, size: u32 },

    #[error("obstacle {cell} lies outside the {size}x{size} grid")]
    ObstacleOutOfBounds { cell: Cell, size: u32 },

    #[error("scenario generation failed: {0}")]
    Synth(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InventoryResult<T> = Result<T, InventoryError>;
