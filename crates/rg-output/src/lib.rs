//! `rg-output` — delivery record writers for the reliefgrid engine.
//!
//! | Writer         | File created        |
//! |----------------|---------------------|
//! | [`CsvWriter`]  | `deliveries.csv`    |
//! | [`JsonWriter`] | `deliveries.json`   |
//!
//! Both carry the fields `sender, receiver, time, resource, quantity`; `time`
//! is empty (CSV) or `null` (JSON) for unreachable routes.  Both implement
//! [`OutputWriter`] and are driven by [`PlanOutputObserver`], which implements
//! `rg_plan::PlanObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rg_output::{CsvWriter, PlanOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = PlanOutputObserver::new(writer);
//! let outcome = rg_plan::run_batch(scenario, &config, &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonWriter;
pub use observer::PlanOutputObserver;
pub use row::DeliveryRow;
pub use writer::OutputWriter;
