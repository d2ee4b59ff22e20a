//! `rg-core` — foundational types for the `reliefgrid` logistics engine.
//!
//! This crate is a dependency of every other `rg-*` crate.  It has no `rg-*`
//! dependencies and minimal external ones (`rustc-hash`, `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`cell`]   | `Cell`, `CellSet`, Euclidean distance                     |
//! | [`ids`]    | `SenderId`, `ReceiverId`                                  |
//! | [`config`] | `PlanConfig`, `SolverKind`, `TransitMetric`               |
//! | [`error`]  | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, CellSet};
pub use config::{PlanConfig, SolverKind, TransitMetric};
pub use error::{CoreError, CoreResult};
pub use ids::{ReceiverId, SenderId};
