//! CSV output backend.
//!
//! Creates `deliveries.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DeliveryRow, OutputResult};

/// Column order of `deliveries.csv`.
pub const DELIVERY_HEADER: [&str; 5] = ["sender", "receiver", "time", "resource", "quantity"];

/// Writes delivery records to a CSV file.
pub struct CsvWriter {
    deliveries: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) `deliveries.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut deliveries = Writer::from_path(dir.join("deliveries.csv"))?;
        deliveries.write_record(DELIVERY_HEADER)?;
        Ok(Self { deliveries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_deliveries(&mut self, rows: &[DeliveryRow]) -> OutputResult<()> {
        for row in rows {
            // Unreachable routes leave the time column empty.
            let time = row.time.map(|t| t.to_string()).unwrap_or_default();
            self.deliveries.write_record([
                row.sender.as_str(),
                row.receiver.as_str(),
                time.as_str(),
                row.resource.as_str(),
                row.quantity.to_string().as_str(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.deliveries.flush()?;
        Ok(())
    }
}
