//! Inventory repository.
//!
//! [`InventoryStore`] is the seam between the service layer (which edits
//! rosters and obstacles between runs) and the planning core (which only sees
//! [`Scenario`] snapshots).  [`MemoryStore`] is the in-process implementation;
//! a database-backed store implements the same trait.
//!
//! # Usage
//!
//! ```rust
//! use rg_core::Cell;
//! use rg_inventory::{InventoryStore, MemoryStore, Receiver, Sender};
//!
//! let mut store = MemoryStore::new(10);
//! store.add_sender(Sender::new("depot", Cell::new(0, 0)).with_resource("food", 10)).unwrap();
//! store.add_receiver(Receiver::new("camp", Cell::new(9, 9)).with_need("food", 4)).unwrap();
//! assert!(store.add_sender(Sender::new("depot", Cell::new(1, 1))).is_err());
//!
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot.senders.len(), 1);
//! ```

use std::collections::BTreeSet;

use rg_core::Cell;
use tracing::debug;

use crate::{EntityKind, InventoryError, InventoryResult, Receiver, ResourceMap, Scenario, Sender};

// ── NameRegistry ──────────────────────────────────────────────────────────────

/// Tracks which sender and receiver names are in use.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    senders:   BTreeSet<String>,
    receivers: BTreeSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn names(&self, kind: EntityKind) -> &BTreeSet<String> {
        match kind {
            EntityKind::Sender   => &self.senders,
            EntityKind::Receiver => &self.receivers,
        }
    }

    fn names_mut(&mut self, kind: EntityKind) -> &mut BTreeSet<String> {
        match kind {
            EntityKind::Sender   => &mut self.senders,
            EntityKind::Receiver => &mut self.receivers,
        }
    }

    pub fn contains(&self, kind: EntityKind, name: &str) -> bool {
        self.names(kind).contains(name)
    }

    /// Reserve `name`, failing if it is already taken.
    pub fn claim(&mut self, kind: EntityKind, name: &str) -> InventoryResult<()> {
        if !self.names_mut(kind).insert(name.to_owned()) {
            return Err(InventoryError::NameTaken { kind, name: name.to_owned() });
        }
        Ok(())
    }

    /// Release `name`, failing if it was never claimed.
    pub fn release(&mut self, kind: EntityKind, name: &str) -> InventoryResult<()> {
        if !self.names_mut(kind).remove(name) {
            return Err(InventoryError::UnknownName { kind, name: name.to_owned() });
        }
        Ok(())
    }
}

// ── InventoryStore ────────────────────────────────────────────────────────────

/// Repository of rosters, resource maps, and obstacles.
pub trait InventoryStore {
    /// Copy of the current state for one planning run.
    fn snapshot(&self) -> Scenario;

    fn add_sender(&mut self, sender: Sender) -> InventoryResult<()>;
    fn add_receiver(&mut self, receiver: Receiver) -> InventoryResult<()>;

    fn remove_sender(&mut self, name: &str) -> InventoryResult<Sender>;
    fn remove_receiver(&mut self, name: &str) -> InventoryResult<Receiver>;

    fn relocate_sender(&mut self, name: &str, to: Cell) -> InventoryResult<()>;
    fn relocate_receiver(&mut self, name: &str, to: Cell) -> InventoryResult<()>;

    /// Replace a sender's whole resource map.
    fn set_resources(&mut self, name: &str, resources: ResourceMap) -> InventoryResult<()>;
    /// Replace a receiver's whole needs map.
    fn set_needs(&mut self, name: &str, needs: ResourceMap) -> InventoryResult<()>;

    /// Block `cell`.  Returns `false` if it was already blocked.
    fn add_obstacle(&mut self, cell: Cell) -> InventoryResult<bool>;
    /// Unblock `cell`.  Returns `false` if it was not blocked.
    fn remove_obstacle(&mut self, cell: Cell) -> bool;

    /// Write post-run resource and need maps back, matched by name.
    ///
    /// Entities absent from the store (removed while the run was in flight)
    /// are skipped.
    fn commit(&mut self, senders: &[Sender], receivers: &[Receiver]) -> InventoryResult<()>;
}

// ── MemoryStore ───────────────────────────────────────────────────────────────

/// In-process [`InventoryStore`] owned by the service layer.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    scenario: Scenario,
    names:    NameRegistry,
}

impl MemoryStore {
    /// Empty store for an `n × n` grid.
    pub fn new(size: u32) -> Self {
        Self { scenario: Scenario::new(size), names: NameRegistry::new() }
    }

    /// Seed a store from a loaded scenario, checking name uniqueness and
    /// bounds the same way the `add_*` methods do.
    pub fn from_scenario(scenario: Scenario) -> InventoryResult<Self> {
        let mut store = Self::new(scenario.size);
        for cell in scenario.obstacles {
            store.add_obstacle(cell)?;
        }
        for s in scenario.senders {
            store.add_sender(s)?;
        }
        for r in scenario.receivers {
            store.add_receiver(r)?;
        }
        Ok(store)
    }

    pub fn size(&self) -> u32 {
        self.scenario.size
    }

    pub fn names(&self) -> &NameRegistry {
        &self.names
    }

    fn check_bounds(&self, kind: EntityKind, name: &str, cell: Cell) -> InventoryResult<()> {
        if cell.in_bounds(self.scenario.size) {
            Ok(())
        } else {
            Err(InventoryError::OutOfBounds {
                kind,
                name: name.to_owned(),
                cell,
                size: self.scenario.size,
            })
        }
    }

    fn sender_mut(&mut self, name: &str) -> InventoryResult<&mut Sender> {
        self.scenario
            .senders
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| InventoryError::UnknownName { kind: EntityKind::Sender, name: name.to_owned() })
    }

    fn receiver_mut(&mut self, name: &str) -> InventoryResult<&mut Receiver> {
        self.scenario
            .receivers
            .iter_mut()
            .find(|r| r.name == name)
            .ok_or_else(|| InventoryError::UnknownName { kind: EntityKind::Receiver, name: name.to_owned() })
    }
}

impl InventoryStore for MemoryStore {
    fn snapshot(&self) -> Scenario {
        self.scenario.clone()
    }

    fn add_sender(&mut self, sender: Sender) -> InventoryResult<()> {
        self.check_bounds(EntityKind::Sender, &sender.name, sender.position)?;
        self.names.claim(EntityKind::Sender, &sender.name)?;
        debug!(name = %sender.name, position = %sender.position, "sender added");
        self.scenario.senders.push(sender);
        Ok(())
    }

    fn add_receiver(&mut self, receiver: Receiver) -> InventoryResult<()> {
        self.check_bounds(EntityKind::Receiver, &receiver.name, receiver.position)?;
        self.names.claim(EntityKind::Receiver, &receiver.name)?;
        debug!(name = %receiver.name, position = %receiver.position, "receiver added");
        self.scenario.receivers.push(receiver);
        Ok(())
    }

    fn remove_sender(&mut self, name: &str) -> InventoryResult<Sender> {
        self.names.release(EntityKind::Sender, name)?;
        let idx = self
            .scenario
            .senders
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| InventoryError::UnknownName { kind: EntityKind::Sender, name: name.to_owned() })?;
        Ok(self.scenario.senders.remove(idx))
    }

    fn remove_receiver(&mut self, name: &str) -> InventoryResult<Receiver> {
        self.names.release(EntityKind::Receiver, name)?;
        let idx = self
            .scenario
            .receivers
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| InventoryError::UnknownName { kind: EntityKind::Receiver, name: name.to_owned() })?;
        Ok(self.scenario.receivers.remove(idx))
    }

    fn relocate_sender(&mut self, name: &str, to: Cell) -> InventoryResult<()> {
        self.check_bounds(EntityKind::Sender, name, to)?;
        self.sender_mut(name)?.position = to;
        Ok(())
    }

    fn relocate_receiver(&mut self, name: &str, to: Cell) -> InventoryResult<()> {
        self.check_bounds(EntityKind::Receiver, name, to)?;
        self.receiver_mut(name)?.position = to;
        Ok(())
    }

    fn set_resources(&mut self, name: &str, resources: ResourceMap) -> InventoryResult<()> {
        self.sender_mut(name)?.resources = resources;
        Ok(())
    }

    fn set_needs(&mut self, name: &str, needs: ResourceMap) -> InventoryResult<()> {
        self.receiver_mut(name)?.needs = needs;
        Ok(())
    }

    fn add_obstacle(&mut self, cell: Cell) -> InventoryResult<bool> {
        if !cell.in_bounds(self.scenario.size) {
            return Err(InventoryError::ObstacleOutOfBounds { cell, size: self.scenario.size });
        }
        if self.scenario.obstacles.contains(&cell) {
            return Ok(false);
        }
        self.scenario.obstacles.push(cell);
        Ok(true)
    }

    fn remove_obstacle(&mut self, cell: Cell) -> bool {
        let before = self.scenario.obstacles.len();
        self.scenario.obstacles.retain(|&c| c != cell);
        self.scenario.obstacles.len() != before
    }

    fn commit(&mut self, senders: &[Sender], receivers: &[Receiver]) -> InventoryResult<()> {
        for s in senders {
            if let Ok(stored) = self.sender_mut(&s.name) {
                stored.resources = s.resources.clone();
            }
        }
        for r in receivers {
            if let Ok(stored) = self.receiver_mut(&r.name) {
                stored.needs = r.needs.clone();
            }
        }
        Ok(())
    }
}
