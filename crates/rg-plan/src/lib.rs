//! `rg-plan` — delivery planning for the reliefgrid engine.
//!
//! # Batch pipeline
//!
//! ```text
//! run_batch(scenario, config, observer):
//!   ① Graph     — GridGraph::build(n, obstacles)
//!   ② Validate  — every sender and receiver on a free cell
//!   ③ Match     — rg_match::match_resources mutates the rosters
//!   ④ Route     — one path query per match (parallel with `parallel`)
//!   ⑤ Report    — DeliveryRecord per match, in match order
//! ```
//!
//! Matching always completes before any route is computed.  The graph is
//! never mutated after ①.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the path queries on Rayon's thread pool.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rg_core::PlanConfig;
//! use rg_plan::{NoopObserver, run_batch};
//!
//! let scenario = rg_inventory::load_scenario(&locations, &resources)?;
//! let outcome = run_batch(scenario, &PlanConfig::default(), &mut NoopObserver)?;
//! for d in &outcome.deliveries {
//!     println!("{} -> {}: {:?}", d.record.sender_name, d.record.receiver_name, d.record.time);
//! }
//! ```

pub mod batch;
pub mod error;
pub mod observer;
pub mod planner;
pub mod record;


pub use batch::{BatchOutcome, BatchSummary, run_batch};
pub use error::{PlanError, PlanResult};
pub use observer::{NoopObserver, PlanObserver};
pub use planner::{DeliveryPlanner, validate_placements};
pub use record::{Delivery, DeliveryRecord, Transit};
