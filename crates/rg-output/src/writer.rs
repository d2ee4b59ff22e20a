//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DeliveryRow, OutputResult};

/// Trait implemented by the CSV and JSON writers.
///
/// Errors raised while driven by [`PlanOutputObserver`](crate::PlanOutputObserver)
/// are stored there and retrieved with `take_error`.
pub trait OutputWriter {
    /// Append a batch of delivery rows.
    fn write_deliveries(&mut self, rows: &[DeliveryRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
