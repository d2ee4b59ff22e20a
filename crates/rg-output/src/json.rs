//! JSON output backend.
//!
//! Rows are buffered and written to `deliveries.json` as one pretty-printed
//! array on [`finish`](OutputWriter::finish).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::writer::OutputWriter;
use crate::{DeliveryRow, OutputResult};

pub struct JsonWriter {
    out:      BufWriter<File>,
    rows:     Vec<DeliveryRow>,
    finished: bool,
}

impl JsonWriter {
    /// Create `deliveries.json` in `dir`.  The file stays empty until
    /// `finish`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let out = BufWriter::new(File::create(dir.join("deliveries.json"))?);
        Ok(Self { out, rows: Vec::new(), finished: false })
    }
}

impl OutputWriter for JsonWriter {
    fn write_deliveries(&mut self, rows: &[DeliveryRow]) -> OutputResult<()> {
        self.rows.extend_from_slice(rows);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        serde_json::to_writer_pretty(&mut self.out, &self.rows)?;
        self.out.flush()?;
        Ok(())
    }
}
