use rg_core::{Cell, CoreError, ReceiverId, SenderId};
use rg_grid::GridError;
use rg_inventory::EntityKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("{kind} {name:?} is placed on obstacle {cell}")]
    OnObstacle { kind: EntityKind, name: String, cell: Cell },

    #[error("{kind} {name:?} at {cell} lies outside the {size}x{size} grid")]
    OutOfBounds { kind: EntityKind, name: String, cell: Cell, size: u32 },

    #[error("match refers to {0}, which is not in the sender roster")]
    UnknownSender(SenderId),

    #[error("match refers to {0}, which is not in the receiver roster")]
    UnknownReceiver(ReceiverId),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("plan configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("worker pool error: {0}")]
    Pool(String),
}

pub type PlanResult<T> = Result<T, PlanError>;
