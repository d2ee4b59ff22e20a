//! `PlanOutputObserver<W>` — bridges `PlanObserver` to an `OutputWriter`.

use rg_plan::{BatchSummary, Delivery, PlanObserver};

use crate::row::DeliveryRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`PlanObserver`] that streams every delivery to any [`OutputWriter`]
/// backend and finishes the writer when the batch ends.
///
/// Errors from the writer are stored internally because `PlanObserver`
/// methods have no return value.  After `run_batch` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct PlanOutputObserver<W: OutputWriter> {
    writer:     W,
    written:    usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> PlanOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `run_batch` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Rows handed to the writer so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Unwrap the inner writer (e.g. to inspect files after the batch).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> PlanObserver for PlanOutputObserver<W> {
    fn on_delivery(&mut self, delivery: &Delivery) {
        let row = DeliveryRow::from(&delivery.record);
        let result = self.writer.write_deliveries(std::slice::from_ref(&row));
        if result.is_ok() {
            self.written += 1;
        }
        self.store_err(result);
    }

    fn on_batch_end(&mut self, _summary: &BatchSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
