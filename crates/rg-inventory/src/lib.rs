//! `rg-inventory` — who holds what, and where.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`model`]  | `Sender`, `Receiver`, `Scenario`, `ResourceMap`           |
//! | [`store`]  | `InventoryStore` trait, `MemoryStore`, `NameRegistry`     |
//! | [`loader`] | `locations.json` / `resources.json` load and save         |
//! | [`synth`]  | Seeded synthetic scenario generator                       |
//! | [`error`]  | `InventoryError`, `InventoryResult<T>`                    |
//!
//! The planning core never touches a store directly: the service layer takes
//! a [`Scenario`] snapshot, runs the batch on it, and commits the updated
//! quantities back through [`InventoryStore::commit`].

pub mod error;
pub mod loader;
pub mod model;
pub mod store;
pub mod synth;

#[cfg(test)]
mod tests;

pub use error::{EntityKind, InventoryError, InventoryResult};
pub use loader::{load_scenario, load_scenario_reader, save_resources, save_resources_writer};
pub use model::{Quantity, Receiver, ResourceMap, Scenario, Sender};
pub use store::{InventoryStore, MemoryStore, NameRegistry};
pub use synth::{SynthParams, generate};
