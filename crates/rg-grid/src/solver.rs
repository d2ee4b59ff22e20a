//! Pluggable shortest-path solver trait.
//!
//! `rg-plan` routes deliveries through [`PathSolver`], so the algorithm can be
//! swapped at compile time ([`Dijkstra`], [`AStar`]) or at run time
//! ([`SolverKind`] from the plan config) without touching the planner.
//!
//! # Result contract
//!
//! Every implementation must:
//! - fail with [`GridError::InvalidNode`](crate::GridError::InvalidNode) when
//!   `start` or `goal` is not a node of the graph;
//! - return an empty [`Path`] when the goal is unreachable;
//! - return an optimal-cost path otherwise, identical across runs for
//!   identical input.

use rg_core::{Cell, SolverKind};

use crate::{GridGraph, GridResult, Path};

/// Shortest-path engine over a [`GridGraph`].
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so they can be shared across Rayon
/// worker threads when the planner's `parallel` feature is on.
pub trait PathSolver: Send + Sync {
    /// Compute a route from `start` to `goal`.
    fn solve(&self, graph: &GridGraph, start: Cell, goal: Cell) -> GridResult<Path>;

    /// Label for logs.
    fn name(&self) -> &'static str;
}

/// Uniform-cost search.  See [`dijkstra`](crate::dijkstra()).
#[derive(Copy, Clone, Debug, Default)]
pub struct Dijkstra;

impl PathSolver for Dijkstra {
    fn solve(&self, graph: &GridGraph, start: Cell, goal: Cell) -> GridResult<Path> {
        crate::dijkstra(graph, start, goal)
    }

    fn name(&self) -> &'static str {
        SolverKind::Dijkstra.as_str()
    }
}

/// Heuristic search with the Euclidean estimate.  See [`a_star`](crate::a_star()).
#[derive(Copy, Clone, Debug, Default)]
pub struct AStar;

impl PathSolver for AStar {
    fn solve(&self, graph: &GridGraph, start: Cell, goal: Cell) -> GridResult<Path> {
        crate::a_star(graph, start, goal)
    }

    fn name(&self) -> &'static str {
        SolverKind::AStar.as_str()
    }
}

impl PathSolver for SolverKind {
    fn solve(&self, graph: &GridGraph, start: Cell, goal: Cell) -> GridResult<Path> {
        match self {
            SolverKind::Dijkstra => Dijkstra.solve(graph, start, goal),
            SolverKind::AStar    => AStar.solve(graph, start, goal),
        }
    }

    fn name(&self) -> &'static str {
        self.as_str()
    }
}
