//! Seeded synthetic scenarios.
//!
//! Produces an obstacle field plus sender and receiver rosters on distinct
//! free cells.  The same `(params, seed)` pair always yields the same
//! scenario, so benchmark runs and randomised tests are reproducible.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use rg_core::Cell;

use crate::{InventoryError, InventoryResult, Receiver, Scenario, Sender};

/// Shape of a generated scenario.
#[derive(Clone, Debug)]
pub struct SynthParams {
    /// Grid side length.
    pub size: u32,
    /// Probability that any given cell is an obstacle, in `[0, 1)`.
    pub obstacle_density: f64,
    pub senders: usize,
    pub receivers: usize,
    /// Resource names to draw from.
    pub resources: Vec<String>,
    /// Upper bound (inclusive) for any single stock or need quantity.
    pub max_quantity: u64,
}

impl Default for SynthParams {
    fn default() -> Self {
        Self {
            size:             32,
            obstacle_density: 0.2,
            senders:          6,
            receivers:        12,
            resources:        ["food", "water", "medicine"].map(String::from).to_vec(),
            max_quantity:     50,
        }
    }
}

/// Generate a scenario from `params`, deterministically seeded by `seed`.
///
/// Every sender stocks and every receiver needs at least one resource.
pub fn generate(params: &SynthParams, seed: u64) -> InventoryResult<Scenario> {
    if params.size == 0 {
        return Err(InventoryError::Synth("grid size must be positive".into()));
    }
    if !(0.0..1.0).contains(&params.obstacle_density) {
        return Err(InventoryError::Synth(format!(
            "obstacle density {} outside [0, 1)",
            params.obstacle_density
        )));
    }
    if params.resources.is_empty() || params.max_quantity == 0 {
        return Err(InventoryError::Synth("need at least one resource and a positive max quantity".into()));
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let n = params.size;

    let mut scenario = Scenario::new(n);
    let mut free = Vec::new();
    for row in 0..n {
        for col in 0..n {
            let cell = Cell::new(row, col);
            if rng.gen_bool(params.obstacle_density) {
                scenario.obstacles.push(cell);
            } else {
                free.push(cell);
            }
        }
    }

    let wanted = params.senders + params.receivers;
    if free.len() < wanted {
        return Err(InventoryError::Synth(format!(
            "{wanted} entities requested but only {} free cells",
            free.len()
        )));
    }
    free.shuffle(&mut rng);
    let mut spots = free.into_iter();

    for i in 0..params.senders {
        let mut sender = Sender::new(format!("sender-{i}"), spots.next().unwrap_or_default());
        for res in pick_resources(&params.resources, &mut rng) {
            sender = sender.with_resource(res, rng.gen_range(1..=params.max_quantity));
        }
        scenario.senders.push(sender);
    }

    for i in 0..params.receivers {
        let mut receiver = Receiver::new(format!("receiver-{i}"), spots.next().unwrap_or_default());
        for res in pick_resources(&params.resources, &mut rng) {
            receiver = receiver.with_need(res, rng.gen_range(1..=params.max_quantity));
        }
        scenario.receivers.push(receiver);
    }

    debug!(seed, size = n, obstacles = scenario.obstacles.len(), "synthetic scenario generated");
    Ok(scenario)
}

/// A non-empty random subset of `resources`.
fn pick_resources<'a>(resources: &'a [String], rng: &mut SmallRng) -> Vec<&'a str> {
    let count = rng.gen_range(1..=resources.len());
    resources
        .choose_multiple(rng, count)
        .map(String::as_str)
        .collect()
}
