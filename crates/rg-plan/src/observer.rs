//! Batch observer trait for progress reporting and data collection.

use rg_grid::GridGraph;
use rg_match::MatchReport;

use crate::{BatchSummary, Delivery};

/// Callbacks invoked by [`run_batch`][crate::run_batch] at each stage.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — delivery counter
///
/// ```rust,ignore
/// struct Counter { unreachable: usize }
///
/// impl PlanObserver for Counter {
///     fn on_delivery(&mut self, delivery: &Delivery) {
///         if !delivery.record.transit.is_reachable() {
///             self.unreachable += 1;
///         }
///     }
/// }
/// ```
pub trait PlanObserver {
    /// Called once the graph is built, before placements are validated.
    fn on_graph_built(&mut self, _graph: &GridGraph) {}

    /// Called after matching, before any route is computed.
    fn on_matched(&mut self, _report: &MatchReport) {}

    /// Called for every delivery, in match order.
    fn on_delivery(&mut self, _delivery: &Delivery) {}

    /// Called once after the last delivery.
    fn on_batch_end(&mut self, _summary: &BatchSummary) {}
}

/// A [`PlanObserver`] that does nothing.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}
