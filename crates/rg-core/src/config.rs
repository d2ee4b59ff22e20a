//! Batch-planning configuration.
//!
//! One `PlanConfig` drives a whole run: which solver computes delivery
//! routes, how a route is turned into a transit time, whether full paths are
//! kept for display, and how many worker threads the `parallel` planner may
//! use.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

// ── SolverKind ────────────────────────────────────────────────────────────────

/// Shortest-path algorithm used for delivery routes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SolverKind {
    /// Uniform-cost search; no heuristic.
    Dijkstra,
    /// Best-first search guided by the straight-line distance to the goal.
    #[default]
    AStar,
}

impl SolverKind {
    /// Label used in logs and config files.
    pub fn as_str(self) -> &'static str {
        match self {
            SolverKind::Dijkstra => "dijkstra",
            SolverKind::AStar    => "a_star",
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SolverKind {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra"                   => Ok(SolverKind::Dijkstra),
            "a_star" | "astar" | "a*"    => Ok(SolverKind::AStar),
            other => Err(CoreError::Parse(format!(
                "unknown solver {other:?}: expected \"dijkstra\" or \"a_star\""
            ))),
        }
    }
}

// ── TransitMetric ─────────────────────────────────────────────────────────────

/// How a route is converted into a delivery time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TransitMetric {
    /// Number of cells on the path, endpoints included.
    #[default]
    Cells,
    /// Sum of edge weights along the path.
    Cost,
}

impl TransitMetric {
    pub fn as_str(self) -> &'static str {
        match self {
            TransitMetric::Cells => "cells",
            TransitMetric::Cost  => "cost",
        }
    }
}

impl fmt::Display for TransitMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PlanConfig ────────────────────────────────────────────────────────────────

/// Top-level planning configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the planner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlanConfig {
    /// Route solver.  Default: A*.
    pub solver: SolverKind,

    /// Transit-time definition written to delivery records.  Default: cells.
    pub transit_metric: TransitMetric,

    /// Keep every computed path alongside its delivery record.
    pub keep_paths: bool,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    /// Ignored without the `parallel` feature of `rg-plan`.
    pub num_threads: Option<usize>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            solver:         SolverKind::default(),
            transit_metric: TransitMetric::default(),
            keep_paths:     false,
            num_threads:    None,
        }
    }
}

impl PlanConfig {
    /// Reject settings that cannot be honoured.
    pub fn validate(&self) -> CoreResult<()> {
        if self.num_threads == Some(0) {
            return Err(CoreError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}
