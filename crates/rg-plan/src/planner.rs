//! Per-match routing.

use rg_core::{Cell, PlanConfig};
use rg_grid::{GridGraph, PathSolver};
use rg_inventory::{EntityKind, Receiver, Sender};
use rg_match::Match;
use tracing::{debug, warn};

use crate::{Delivery, DeliveryRecord, PlanError, PlanResult, Transit};

// ── Placement check ───────────────────────────────────────────────────────────

/// Fail unless every sender and receiver sits on a free cell of `graph`.
pub fn validate_placements(graph: &GridGraph, senders: &[Sender], receivers: &[Receiver]) -> PlanResult<()> {
    let entities = senders
        .iter()
        .map(|s| (EntityKind::Sender, s.name.as_str(), s.position))
        .chain(receivers.iter().map(|r| (EntityKind::Receiver, r.name.as_str(), r.position)));

    for (kind, name, cell) in entities {
        check_placement(graph, kind, name, cell)?;
    }
    Ok(())
}

fn check_placement(graph: &GridGraph, kind: EntityKind, name: &str, cell: Cell) -> PlanResult<()> {
    if !graph.in_bounds(cell) {
        return Err(PlanError::OutOfBounds { kind, name: name.to_owned(), cell, size: graph.size() });
    }
    if graph.is_obstacle(cell) {
        return Err(PlanError::OnObstacle { kind, name: name.to_owned(), cell });
    }
    Ok(())
}

// ── DeliveryPlanner ───────────────────────────────────────────────────────────

/// Turns matches into delivery records by routing each one over a shared,
/// read-only graph.
///
/// `S` is any [`PathSolver`]; [`SolverKind`](rg_core::SolverKind) picks one
/// at run time from the config.
pub struct DeliveryPlanner<S: PathSolver> {
    graph:  GridGraph,
    solver: S,
    config: PlanConfig,
}

impl<S: PathSolver> DeliveryPlanner<S> {
    /// Validates `config`.
    pub fn new(graph: GridGraph, solver: S, config: PlanConfig) -> PlanResult<Self> {
        config.validate()?;
        Ok(Self { graph, solver, config })
    }

    pub fn graph(&self) -> &GridGraph {
        &self.graph
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Route every match.  Output order is match order.
    ///
    /// Placements are checked with [`validate_placements`] before any routing,
    /// so a misplaced entity fails the call with its name instead of a bare
    /// solver error.
    ///
    /// With the `parallel` Cargo feature the path queries run on Rayon's
    /// thread pool (sized by `config.num_threads` when set).
    pub fn plan(&self, senders: &[Sender], receivers: &[Receiver], matches: &[Match]) -> PlanResult<Vec<Delivery>> {
        validate_placements(&self.graph, senders, receivers)?;
        debug!(solver = self.solver.name(), matches = matches.len(), "planning deliveries");

        #[cfg(not(feature = "parallel"))]
        {
            matches.iter().map(|m| self.route(senders, receivers, m)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let run = || {
                matches
                    .par_iter()
                    .map(|m| self.route(senders, receivers, m))
                    .collect::<PlanResult<Vec<_>>>()
            };
            match self.config.num_threads {
                None => run(),
                Some(n) => rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| PlanError::Pool(e.to_string()))?
                    .install(run),
            }
        }
    }

    /// Route a single match.
    pub fn route(&self, senders: &[Sender], receivers: &[Receiver], m: &Match) -> PlanResult<Delivery> {
        let sender = senders
            .get(m.sender.index())
            .ok_or(PlanError::UnknownSender(m.sender))?;
        let receiver = receivers
            .get(m.receiver.index())
            .ok_or(PlanError::UnknownReceiver(m.receiver))?;

        let path = self.solver.solve(&self.graph, sender.position, receiver.position)?;
        let transit = Transit::from_path(&path);

        match transit {
            Transit::Reachable { cells, cost } => debug!(
                sender = %sender.name,
                receiver = %receiver.name,
                resource = %m.resource,
                cells,
                cost,
                "route found"
            ),
            Transit::Unreachable => warn!(
                sender = %sender.name,
                receiver = %receiver.name,
                resource = %m.resource,
                from = %sender.position,
                to = %receiver.position,
                "no route between sender and receiver"
            ),
        }

        let record = DeliveryRecord {
            sender:        m.sender,
            receiver:      m.receiver,
            sender_name:   sender.name.clone(),
            receiver_name: receiver.name.clone(),
            resource:      m.resource.clone(),
            quantity:      m.quantity,
            transit,
            time:          transit.time(self.config.transit_metric),
        };
        let path = self.config.keep_paths.then_some(path);
        Ok(Delivery { record, path })
    }
}
