//! `rg-grid` — obstacle grid graph and shortest-path solvers.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`graph`]    | `GridGraph` (CSR over free cells, 8-neighbourhood)       |
//! | [`path`]     | `Path`                                                   |
//! | [`solver`]   | `PathSolver` trait, `Dijkstra`, `AStar`                  |
//! | [`dijkstra`] | `dijkstra` free function                                 |
//! | [`astar`]    | `a_star` free function                                   |
//! | [`error`]    | `GridError`, `GridResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Path`.                 |

pub mod astar;
pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod path;
pub mod solver;

#[cfg(test)]
mod tests;

pub use astar::a_star;
pub use dijkstra::dijkstra;
pub use error::{GridError, GridResult};
pub use graph::{DIRECTIONS, GridGraph};
pub use path::Path;
pub use solver::{AStar, Dijkstra, PathSolver};
