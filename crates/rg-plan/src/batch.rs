//! One full planning run over a scenario snapshot.

use rg_core::PlanConfig;
use rg_grid::GridGraph;
use rg_inventory::Scenario;
use rg_match::{MatchReport, match_resources};
use tracing::info;

use crate::{Delivery, DeliveryPlanner, PlanObserver, PlanResult, validate_placements};

/// Headline numbers for a finished batch.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub matches:       usize,
    pub reachable:     usize,
    pub unreachable:   usize,
    pub unsatisfiable: usize,
    pub partial:       usize,
}

/// Everything a batch produced.
#[derive(Debug)]
pub struct BatchOutcome {
    /// The input snapshot with post-matching quantities.
    pub scenario:   Scenario,
    pub report:     MatchReport,
    /// One per match, in match order.
    pub deliveries: Vec<Delivery>,
    pub summary:    BatchSummary,
}

/// Build the graph, check placements, match, then route every match.
///
/// Setup failures (bad grid, misplaced entity, bad config) abort before any
/// roster is touched.  Shortfalls and unreachable routes do not abort; they
/// are reported in the outcome.
pub fn run_batch<O: PlanObserver>(
    mut scenario: Scenario,
    config:       &PlanConfig,
    observer:     &mut O,
) -> PlanResult<BatchOutcome> {
    config.validate()?;

    let graph = GridGraph::build(scenario.size, &scenario.obstacles)?;
    observer.on_graph_built(&graph);

    validate_placements(&graph, &scenario.senders, &scenario.receivers)?;
    let planner = DeliveryPlanner::new(graph, config.solver, config.clone())?;

    let report = match_resources(&mut scenario.senders, &mut scenario.receivers);
    observer.on_matched(&report);

    let deliveries = planner.plan(&scenario.senders, &scenario.receivers, &report.matches)?;
    for delivery in &deliveries {
        observer.on_delivery(delivery);
    }

    let reachable = deliveries.iter().filter(|d| d.record.transit.is_reachable()).count();
    let summary = BatchSummary {
        matches:       report.matches.len(),
        reachable,
        unreachable:   deliveries.len() - reachable,
        unsatisfiable: report.unsatisfiable().count(),
        partial:       report.partials().count(),
    };
    info!(
        solver = %config.solver,
        matches = summary.matches,
        reachable = summary.reachable,
        unreachable = summary.unreachable,
        unsatisfiable = summary.unsatisfiable,
        partial = summary.partial,
        "batch complete"
    );
    observer.on_batch_end(&summary);

    Ok(BatchOutcome { scenario, report, deliveries, summary })
}
