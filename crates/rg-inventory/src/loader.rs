//! JSON scenario loader.
//!
//! # File layout
//!
//! Positions and inventories live in two files.  `x` is the row and `y` the
//! column of the entity's cell.
//!
//! `locations.json`:
//!
//! ```json
//! {
//!   "n": 10,
//!   "obstacles": [[1, 1], [2, 3]],
//!   "senders":   [{ "name": "depot", "x": 0, "y": 0 }],
//!   "receivers": [{ "name": "camp",  "x": 9, "y": 9 }]
//! }
//! ```
//!
//! `resources.json`:
//!
//! ```json
//! {
//!   "senders":   [{ "name": "depot", "resources": { "food": 10 } }],
//!   "receivers": [{ "name": "camp",  "needs":     { "food": 4 } }]
//! }
//! ```
//!
//! A located entity with no inventory entry gets an empty map.  Inventory
//! entries with no location are dropped with a warning.  A name listed twice in
//! either file is rejected.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use rg_core::Cell;

use crate::{EntityKind, InventoryError, InventoryResult, Receiver, ResourceMap, Scenario, Sender};

// ── File records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationsFile {
    n:         u32,
    #[serde(default)]
    obstacles: Vec<[u32; 2]>,
    #[serde(default)]
    senders:   Vec<PlacedRecord>,
    #[serde(default)]
    receivers: Vec<PlacedRecord>,
}

#[derive(Deserialize)]
struct PlacedRecord {
    name: String,
    x:    u32,
    y:    u32,
}

#[derive(Deserialize, Serialize, Default)]
struct ResourcesFile {
    #[serde(default)]
    senders:   Vec<StockRecord>,
    #[serde(default)]
    receivers: Vec<NeedsRecord>,
}

#[derive(Deserialize, Serialize)]
struct StockRecord {
    name:      String,
    #[serde(default)]
    resources: ResourceMap,
}

#[derive(Deserialize, Serialize)]
struct NeedsRecord {
    name:  String,
    #[serde(default)]
    needs: ResourceMap,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Scenario`] from a `locations.json` / `resources.json` pair.
pub fn load_scenario(locations: &Path, resources: &Path) -> InventoryResult<Scenario> {
    let loc = BufReader::new(File::open(locations)?);
    let res = BufReader::new(File::open(resources)?);
    load_scenario_reader(loc, res)
}

/// Like [`load_scenario`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor` or byte slice).
pub fn load_scenario_reader<L: Read, R: Read>(locations: L, resources: R) -> InventoryResult<Scenario> {
    let loc: LocationsFile = serde_json::from_reader(locations)?;
    let res: ResourcesFile = serde_json::from_reader(resources)?;

    let mut stock = index_by_name(EntityKind::Sender, res.senders.into_iter().map(|r| (r.name, r.resources)))?;
    let mut needs = index_by_name(EntityKind::Receiver, res.receivers.into_iter().map(|r| (r.name, r.needs)))?;

    let mut scenario = Scenario::new(loc.n);
    scenario.obstacles = loc.obstacles.into_iter().map(|[x, y]| Cell::new(x, y)).collect();

    for rec in loc.senders {
        if scenario.sender(&rec.name).is_some() {
            return Err(InventoryError::NameTaken { kind: EntityKind::Sender, name: rec.name });
        }
        let resources = stock.remove(&rec.name).unwrap_or_default();
        scenario.senders.push(Sender { name: rec.name, position: Cell::new(rec.x, rec.y), resources });
    }

    for rec in loc.receivers {
        if scenario.receiver(&rec.name).is_some() {
            return Err(InventoryError::NameTaken { kind: EntityKind::Receiver, name: rec.name });
        }
        let needs = needs.remove(&rec.name).unwrap_or_default();
        scenario.receivers.push(Receiver { name: rec.name, position: Cell::new(rec.x, rec.y), needs });
    }

    for name in stock.keys() {
        warn!(%name, "sender inventory has no location; dropped");
    }
    for name in needs.keys() {
        warn!(%name, "receiver needs have no location; dropped");
    }

    info!(
        size = scenario.size,
        obstacles = scenario.obstacles.len(),
        senders = scenario.senders.len(),
        receivers = scenario.receivers.len(),
        "scenario loaded"
    );
    Ok(scenario)
}

/// Write the rosters' resource and need maps to `path` in the
/// `resources.json` layout.
pub fn save_resources(path: &Path, senders: &[Sender], receivers: &[Receiver]) -> InventoryResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    save_resources_writer(&mut out, senders, receivers)?;
    out.flush()?;
    Ok(())
}

/// Like [`save_resources`] but accepts any `Write` sink.
pub fn save_resources_writer<W: Write>(
    writer:    W,
    senders:   &[Sender],
    receivers: &[Receiver],
) -> InventoryResult<()> {
    let file = ResourcesFile {
        senders: senders
            .iter()
            .map(|s| StockRecord { name: s.name.clone(), resources: s.resources.clone() })
            .collect(),
        receivers: receivers
            .iter()
            .map(|r| NeedsRecord { name: r.name.clone(), needs: r.needs.clone() })
            .collect(),
    };
    serde_json::to_writer_pretty(writer, &file)?;
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Collect `(name, map)` inventory entries, rejecting a name seen twice.
fn index_by_name<I>(kind: EntityKind, entries: I) -> InventoryResult<HashMap<String, ResourceMap>>
where
    I: IntoIterator<Item = (String, ResourceMap)>,
{
    let mut index = HashMap::new();
    for (name, map) in entries {
        if index.contains_key(&name) {
            return Err(InventoryError::NameTaken { kind, name });
        }
        index.insert(name, map);
    }
    Ok(index)
}
