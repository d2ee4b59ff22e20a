//! Delivery records.

use rg_core::{ReceiverId, SenderId, TransitMetric};
use rg_grid::Path;
use rg_inventory::Quantity;

/// Route outcome for one delivery.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Transit {
    /// A route exists.  `cells` counts both endpoints; `cost` is the summed
    /// edge weight.
    Reachable { cells: usize, cost: f64 },
    /// Obstacles separate sender and receiver.
    Unreachable,
}

impl Transit {
    pub fn from_path(path: &Path) -> Self {
        if path.is_unreachable() {
            Transit::Unreachable
        } else {
            Transit::Reachable { cells: path.len(), cost: path.cost }
        }
    }

    #[inline]
    pub fn is_reachable(&self) -> bool {
        matches!(self, Transit::Reachable { .. })
    }

    /// Delivery time under `metric`; `None` when unreachable.
    pub fn time(&self, metric: TransitMetric) -> Option<f64> {
        match *self {
            Transit::Unreachable => None,
            Transit::Reachable { cells, cost } => Some(match metric {
                TransitMetric::Cells => cells as f64,
                TransitMetric::Cost  => cost,
            }),
        }
    }
}

/// One planned shipment: a match plus its route outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct DeliveryRecord {
    pub sender:        SenderId,
    pub receiver:      ReceiverId,
    pub sender_name:   String,
    pub receiver_name: String,
    pub resource:      String,
    pub quantity:      Quantity,
    pub transit:       Transit,
    /// `transit` under the run's configured metric.
    pub time:          Option<f64>,
}

/// A record plus, when `keep_paths` is set, the route itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Delivery {
    pub record: DeliveryRecord,
    pub path:   Option<Path>,
}
