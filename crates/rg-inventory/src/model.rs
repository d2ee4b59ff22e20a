//! Roster entities and the per-run scenario snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use rg_core::Cell;

/// Units of a resource.
pub type Quantity = u64;

/// Resource name → quantity.  Ordered so that iteration, serialization, and
/// therefore matching order are stable.
pub type ResourceMap = BTreeMap<String, Quantity>;

// ── Sender ────────────────────────────────────────────────────────────────────

/// A resource producer ("distributor").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    /// Unique among senders.
    pub name: String,
    pub position: Cell,
    /// Stock on hand.  Quantities only decrease during matching; an entry may
    /// sit at zero once exhausted.
    pub resources: ResourceMap,
}

impl Sender {
    pub fn new(name: impl Into<String>, position: Cell) -> Self {
        Self { name: name.into(), position, resources: ResourceMap::new() }
    }

    /// Builder-style: add `quantity` of `resource` to the stock.
    pub fn with_resource(mut self, resource: impl Into<String>, quantity: Quantity) -> Self {
        *self.resources.entry(resource.into()).or_default() += quantity;
        self
    }

    /// Stock of `resource`, zero if absent.
    pub fn quantity(&self, resource: &str) -> Quantity {
        self.resources.get(resource).copied().unwrap_or(0)
    }
}

// ── Receiver ──────────────────────────────────────────────────────────────────

/// A resource consumer ("camp").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receiver {
    /// Unique among receivers.
    pub name: String,
    pub position: Cell,
    /// Outstanding needs.  An entry is removed once fully met.
    pub needs: ResourceMap,
}

impl Receiver {
    pub fn new(name: impl Into<String>, position: Cell) -> Self {
        Self { name: name.into(), position, needs: ResourceMap::new() }
    }

    /// Builder-style: add `quantity` of `resource` to the needs.
    pub fn with_need(mut self, resource: impl Into<String>, quantity: Quantity) -> Self {
        *self.needs.entry(resource.into()).or_default() += quantity;
        self
    }

    /// Outstanding need for `resource`, zero if absent.
    pub fn need(&self, resource: &str) -> Quantity {
        self.needs.get(resource).copied().unwrap_or(0)
    }

    /// `true` once every need has been met.
    pub fn is_satisfied(&self) -> bool {
        self.needs.values().all(|&q| q == 0)
    }
}

// ── Scenario ──────────────────────────────────────────────────────────────────

/// Everything one planning run consumes: grid, obstacles, and both rosters.
///
/// A plain snapshot.  The run mutates its own copy of the rosters; nothing is
/// shared with the store it came from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Grid side length `n`.
    pub size: u32,
    pub obstacles: Vec<Cell>,
    pub senders: Vec<Sender>,
    pub receivers: Vec<Receiver>,
}

impl Scenario {
    pub fn new(size: u32) -> Self {
        Self { size, ..Self::default() }
    }

    /// Total supply of `resource` across all senders.
    pub fn supply(&self, resource: &str) -> Quantity {
        self.senders.iter().map(|s| s.quantity(resource)).sum()
    }

    /// Total outstanding need for `resource` across all receivers.
    pub fn demand(&self, resource: &str) -> Quantity {
        self.receivers.iter().map(|r| r.need(resource)).sum()
    }

    pub fn sender(&self, name: &str) -> Option<&Sender> {
        self.senders.iter().find(|s| s.name == name)
    }

    pub fn receiver(&self, name: &str) -> Option<&Receiver> {
        self.receivers.iter().find(|r| r.name == name)
    }
}
