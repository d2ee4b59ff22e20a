//! A* search over the grid graph.
//!
//! The heuristic is the straight-line distance to the goal.  Edge weights
//! are themselves straight-line distances between adjacent cells, so the
//! estimate is admissible and consistent and the first time a cell is
//! expanded its `g` is final.  A closed set therefore prunes every stale
//! queue entry without losing optimality.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use rg_core::Cell;
use tracing::trace;

use crate::path::reconstruct;
use crate::{GridGraph, GridResult, Path};

/// Shortest path from `start` to `goal` by A* with the Euclidean heuristic.
///
/// The returned cost always equals [`dijkstra`](crate::dijkstra())'s; the
/// cell sequence may differ on equal-cost ties.
pub fn a_star(graph: &GridGraph, start: Cell, goal: Cell) -> GridResult<Path> {
    graph.check_node(start)?;
    graph.check_node(goal)?;

    if start == goal {
        return Ok(Path::trivial(start));
    }

    let n = graph.size();
    let mut g: Vec<f64>            = vec![f64::INFINITY; graph.slot_count()];
    let mut prev: Vec<Option<Cell>> = vec![None; graph.slot_count()];
    let mut closed: Vec<bool>      = vec![false; graph.slot_count()];

    g[start.index(n)] = 0.0;

    // Keyed by f = g + h; ties broken by Cell.
    let mut open: BinaryHeap<Reverse<(OrderedFloat<f64>, Cell)>> = BinaryHeap::new();
    open.push(Reverse((OrderedFloat(start.distance(goal)), start)));

    let mut expanded = 0usize;
    while let Some(Reverse((_, cell))) = open.pop() {
        let ci = cell.index(n);
        if closed[ci] {
            continue;
        }

        if cell == goal {
            trace!(%start, %goal, expanded, cost = g[ci], "a* reached goal");
            return Ok(reconstruct(&prev, goal, g[ci], n));
        }

        closed[ci] = true;
        expanded += 1;

        let current_g = g[ci];
        for (next, weight) in graph.neighbors(cell) {
            let ni = next.index(n);
            if closed[ni] {
                continue;
            }
            let tentative = current_g + weight;
            if tentative < g[ni] {
                g[ni] = tentative;
                prev[ni] = Some(cell);
                let f = tentative + next.distance(goal);
                open.push(Reverse((OrderedFloat(f), next)));
            }
        }
    }

    trace!(%start, %goal, expanded, "a* exhausted open set");
    Ok(Path::unreachable())
}
