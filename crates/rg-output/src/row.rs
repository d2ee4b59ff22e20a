//! Plain data row written by output backends.

use rg_plan::DeliveryRecord;
use serde::Serialize;

/// One delivery, flattened for tabular output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryRow {
    pub sender:   String,
    pub receiver: String,
    /// Transit time under the run's metric; `None` when no route exists.
    pub time:     Option<f64>,
    pub resource: String,
    pub quantity: u64,
}

impl From<&DeliveryRecord> for DeliveryRow {
    fn from(r: &DeliveryRecord) -> Self {
        Self {
            sender:   r.sender_name.clone(),
            receiver: r.receiver_name.clone(),
            time:     r.time,
            resource: r.resource.clone(),
            quantity: r.quantity,
        }
    }
}
