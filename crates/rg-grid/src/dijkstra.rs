//! Dijkstra's algorithm over the grid graph.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use rg_core::Cell;
use tracing::trace;

use crate::path::reconstruct;
use crate::{GridGraph, GridResult, Path};

/// Shortest path from `start` to `goal` by uniform-cost search.
///
/// Returns an empty [`Path`] if the goal is unreachable, and
/// [`GridError::InvalidNode`](crate::GridError::InvalidNode) if either
/// endpoint is an obstacle or outside the grid.
pub fn dijkstra(graph: &GridGraph, start: Cell, goal: Cell) -> GridResult<Path> {
    graph.check_node(start)?;
    graph.check_node(goal)?;

    if start == goal {
        return Ok(Path::trivial(start));
    }

    let n = graph.size();
    // dist[slot] = best known cost to reach the cell.
    let mut dist = vec![f64::INFINITY; graph.slot_count()];
    // prev[slot] = predecessor on the best known path; `None` for the start.
    let mut prev: Vec<Option<Cell>> = vec![None; graph.slot_count()];

    dist[start.index(n)] = 0.0;

    // Min-heap: Reverse turns BinaryHeap (max) into a min-heap.
    // Secondary key Cell gives deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, Cell)>> = BinaryHeap::new();
    heap.push(Reverse((OrderedFloat(0.0), start)));

    let mut settled = 0usize;
    while let Some(Reverse((OrderedFloat(cost), cell))) = heap.pop() {
        // Skip stale heap entries.
        if cost > dist[cell.index(n)] {
            continue;
        }

        if cell == goal {
            trace!(%start, %goal, settled, cost, "dijkstra reached goal");
            return Ok(reconstruct(&prev, goal, cost, n));
        }
        settled += 1;

        for (next, weight) in graph.neighbors(cell) {
            let slot = next.index(n);
            let new_cost = cost + weight;
            if new_cost < dist[slot] {
                dist[slot] = new_cost;
                prev[slot] = Some(cell);
                heap.push(Reverse((OrderedFloat(new_cost), next)));
            }
        }
    }

    trace!(%start, %goal, settled, "dijkstra exhausted queue");
    Ok(Path::unreachable())
}
