//! Unit tests for rg-grid.
//!
//! Fixtures are hand-built grids plus a few seeded random obstacle fields for
//! the solver-equivalence checks.

#[cfg(test)]
mod helpers {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use rg_core::{Cell, CellSet};

    use crate::{GridGraph, Path};

    /// 3×3 grid with the centre blocked:
    ///
    /// ```text
    ///   . . .
    ///   . # .
    ///   . . .
    /// ```
    pub fn ring() -> GridGraph {
        GridGraph::build(3, [Cell::new(1, 1)]).unwrap()
    }

    /// 5×5 grid whose top-left corner is walled off:
    ///
    /// ```text
    ///   . # . . .
    ///   # # . . .
    ///   . . . . .
    ///   . . . . .
    ///   . . . . .
    /// ```
    pub fn pocket() -> GridGraph {
        GridGraph::build(5, [Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]).unwrap()
    }

    /// Random obstacle field with roughly `density` of the cells blocked.
    pub fn random_obstacles(n: u32, density: f64, seed: u64) -> CellSet {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut set = CellSet::default();
        for row in 0..n {
            for col in 0..n {
                if rng.gen_bool(density) {
                    set.insert(Cell::new(row, col));
                }
            }
        }
        set
    }

    /// Every step is a graph edge and `cost` equals the summed weights.
    pub fn assert_valid_path(graph: &GridGraph, path: &Path) {
        let mut total = 0.0;
        for pair in path.cells.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let w = graph
                .neighbors(a)
                .find(|&(c, _)| c == b)
                .map(|(_, w)| w)
                .unwrap_or_else(|| panic!("{a} -> {b} is not an edge"));
            total += w;
        }
        for &c in &path.cells {
            assert!(graph.contains(c), "path visits non-node {c}");
        }
        assert!((total - path.cost).abs() < 1e-9, "cost {} vs summed {total}", path.cost);
    }
}

// ── Graph construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use rg_core::Cell;

    use crate::{GridError, GridGraph};

    #[test]
    fn open_grid_counts() {
        let g = GridGraph::build(3, std::iter::empty::<Cell>()).unwrap();
        assert_eq!(g.node_count(), 9);
        // Corners 3, edges 5, centre 8 → 4·3 + 4·5 + 8 = 40.
        assert_eq!(g.edge_count(), 40);
        assert_eq!(g.degree(Cell::new(1, 1)), 8);
        assert_eq!(g.degree(Cell::new(0, 0)), 3);
    }

    #[test]
    fn obstacle_is_not_a_node() {
        let g = super::helpers::ring();
        assert_eq!(g.node_count(), 8);
        assert!(!g.contains(Cell::new(1, 1)));
        assert!(g.is_obstacle(Cell::new(1, 1)));
        assert_eq!(g.neighbors(Cell::new(1, 1)).count(), 0);
        assert!(g.cells().all(|c| c != Cell::new(1, 1)));
    }

    #[test]
    fn neighbor_order_and_weights() {
        let g = GridGraph::build(3, std::iter::empty::<Cell>()).unwrap();
        let around: Vec<_> = g.neighbors(Cell::new(1, 1)).collect();
        let cells: Vec<_> = around.iter().map(|&(c, _)| c).collect();
        assert_eq!(
            cells,
            [
                Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2),
                Cell::new(1, 0),                  Cell::new(1, 2),
                Cell::new(2, 0), Cell::new(2, 1), Cell::new(2, 2),
            ]
        );
        for (c, w) in around {
            let diagonal = c.row != 1 && c.col != 1;
            let expected = if diagonal { std::f64::consts::SQRT_2 } else { 1.0 };
            assert_eq!(w, expected, "weight to {c}");
        }
    }

    #[test]
    fn fully_blocked_grid_is_empty() {
        let all: Vec<Cell> = (0..2).flat_map(|r| (0..2).map(move |c| Cell::new(r, c))).collect();
        let g = GridGraph::build(2, &all).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.cells().count(), 0);
    }

    #[test]
    fn single_cell_grid() {
        let g = GridGraph::build(1, std::iter::empty::<Cell>()).unwrap();
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn zero_size_rejected() {
        let r = GridGraph::build(0, std::iter::empty::<Cell>());
        assert!(matches!(r, Err(GridError::InvalidGrid(_))));
    }

    #[test]
    fn out_of_bounds_obstacle_rejected() {
        let r = GridGraph::build(3, [Cell::new(3, 0)]);
        assert!(matches!(r, Err(GridError::OutOfBounds { size: 3, .. })));
    }

    #[test]
    fn duplicate_obstacles_are_harmless() {
        let g = GridGraph::build(3, [Cell::new(1, 1), Cell::new(1, 1)]).unwrap();
        assert_eq!(g.node_count(), 8);
    }

    #[test]
    fn no_edge_touches_obstacle_or_leaves_grid() {
        for seed in 0..20 {
            let n = 4 + (seed as u32 % 9);
            let obstacles = super::helpers::random_obstacles(n, 0.35, seed);
            let g = GridGraph::build(n, &obstacles).unwrap();

            assert_eq!(g.node_count() + obstacles.len(), (n * n) as usize);
            for cell in g.cells() {
                assert!(!obstacles.contains(&cell), "obstacle {cell} is a node");
                for (next, w) in g.neighbors(cell) {
                    assert!(next.in_bounds(n), "{next} out of bounds");
                    assert!(!obstacles.contains(&next), "edge {cell} -> {next} hits obstacle");
                    assert!((w - cell.distance(next)).abs() < 1e-12);
                }
            }
        }
    }
}

// ── Solver contract ───────────────────────────────────────────────────────────

#[cfg(test)]
mod solvers {
    use rg_core::{Cell, SolverKind};

    use super::helpers::assert_valid_path;
    use crate::{AStar, Dijkstra, GridError, GridGraph, PathSolver, a_star, dijkstra};

    const SQRT_2: f64 = std::f64::consts::SQRT_2;

    #[test]
    fn a_star_routes_around_centre() {
        let g = super::helpers::ring();
        let path = a_star(&g, Cell::new(0, 0), Cell::new(2, 2)).unwrap();

        assert_eq!(path.start(), Some(Cell::new(0, 0)));
        assert_eq!(path.goal(), Some(Cell::new(2, 2)));
        assert_eq!(path.hops(), 3);
        assert_eq!(path.len(), 4);
        assert!(!path.cells.contains(&Cell::new(1, 1)));
        assert!((path.cost - (2.0 + SQRT_2)).abs() < 1e-9);
        assert_valid_path(&g, &path);
    }

    #[test]
    fn dijkstra_routes_around_centre() {
        let g = super::helpers::ring();
        let path = dijkstra(&g, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        assert_eq!(path.hops(), 3);
        assert!(!path.cells.contains(&Cell::new(1, 1)));
        assert!((path.cost - (2.0 + SQRT_2)).abs() < 1e-9);
        assert_valid_path(&g, &path);
    }

    #[test]
    fn ties_break_on_cell_order() {
        // Both (0,1) and (1,0) start an optimal route; the smaller cell wins.
        let g = super::helpers::ring();
        let d = dijkstra(&g, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        let a = a_star(&g, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        assert_eq!(d.cells[1], Cell::new(0, 1));
        assert_eq!(a.cells[1], Cell::new(0, 1));
    }

    #[test]
    fn repeated_queries_are_identical() {
        let obstacles = super::helpers::random_obstacles(25, 0.3, 7);
        let g = GridGraph::build(25, &obstacles).unwrap();
        let cells: Vec<_> = g.cells().collect();
        let (s, t) = (cells[0], cells[cells.len() - 1]);
        assert_eq!(dijkstra(&g, s, t).unwrap(), dijkstra(&g, s, t).unwrap());
        assert_eq!(a_star(&g, s, t).unwrap(), a_star(&g, s, t).unwrap());
    }

    #[test]
    fn same_start_and_goal() {
        let g = super::helpers::ring();
        for solver in [SolverKind::Dijkstra, SolverKind::AStar] {
            let p = solver.solve(&g, Cell::new(2, 0), Cell::new(2, 0)).unwrap();
            assert_eq!(p.cells, vec![Cell::new(2, 0)]);
            assert_eq!(p.hops(), 0);
            assert_eq!(p.cost, 0.0);
        }
    }

    #[test]
    fn straight_line_is_cheapest() {
        let g = GridGraph::build(6, std::iter::empty::<Cell>()).unwrap();
        let p = a_star(&g, Cell::new(0, 0), Cell::new(5, 5)).unwrap();
        assert_eq!(p.hops(), 5);
        assert!((p.cost - 5.0 * SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn enclosed_pocket_is_unreachable() {
        let g = super::helpers::pocket();
        let inside = Cell::new(0, 0);
        let outside = Cell::new(4, 4);
        for solver in [SolverKind::Dijkstra, SolverKind::AStar] {
            let there = solver.solve(&g, outside, inside).unwrap();
            let back  = solver.solve(&g, inside, outside).unwrap();
            assert!(there.is_unreachable(), "{solver} found a way in");
            assert!(back.is_unreachable(), "{solver} found a way out");
            assert_eq!(there.cost, 0.0);
        }
    }

    #[test]
    fn obstacle_endpoint_is_invalid_node() {
        let g = super::helpers::ring();
        let centre = Cell::new(1, 1);
        assert!(matches!(dijkstra(&g, centre, Cell::new(0, 0)), Err(GridError::InvalidNode(c)) if c == centre));
        assert!(matches!(a_star(&g, Cell::new(0, 0), centre), Err(GridError::InvalidNode(c)) if c == centre));
    }

    #[test]
    fn out_of_bounds_endpoint_is_invalid_node() {
        let g = super::helpers::ring();
        let far = Cell::new(9, 9);
        assert!(matches!(Dijkstra.solve(&g, Cell::new(0, 0), far), Err(GridError::InvalidNode(_))));
        assert!(matches!(AStar.solve(&g, far, Cell::new(0, 0)), Err(GridError::InvalidNode(_))));
    }

    #[test]
    fn solver_names() {
        assert_eq!(Dijkstra.name(), "dijkstra");
        assert_eq!(AStar.name(), "a_star");
        assert_eq!(SolverKind::AStar.name(), "a_star");
    }
}

// ── Dijkstra / A* equivalence ─────────────────────────────────────────────────

#[cfg(test)]
mod equivalence {
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    use super::helpers::{assert_valid_path, random_obstacles};
    use crate::{GridGraph, a_star, dijkstra};

    #[test]
    fn equal_cost_on_random_grids() {
        let mut rng = SmallRng::seed_from_u64(99);
        for seed in 0..12 {
            let n = 8 + seed as u32 * 2;
            let g = GridGraph::build(n, &random_obstacles(n, 0.3, seed)).unwrap();
            let cells: Vec<_> = g.cells().collect();

            for _ in 0..25 {
                let s = *cells.choose(&mut rng).unwrap();
                let t = *cells.choose(&mut rng).unwrap();
                let d = dijkstra(&g, s, t).unwrap();
                let a = a_star(&g, s, t).unwrap();

                assert_eq!(d.is_unreachable(), a.is_unreachable(), "{s} -> {t}");
                if !d.is_unreachable() {
                    assert!((d.cost - a.cost).abs() < 1e-9, "{s} -> {t}: {} vs {}", d.cost, a.cost);
                    assert_valid_path(&g, &d);
                    assert_valid_path(&g, &a);
                    assert_eq!(d.start(), Some(s));
                    assert_eq!(a.goal(), Some(t));
                }
            }
        }
    }
}
