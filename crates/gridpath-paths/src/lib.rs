//! Shortest-path search on 4-connected grids.
//!
//! - **A\*** shortest-path search ([`find_path`], [`astar_path`])
//! - **BFS** unit-cost distance maps ([`bfs_distances`])
//! - **Reachability** flood-fill ([`reachable`])
//!
//! Every call is independent: searches allocate their own open and closed
//! sets and keep no state between calls, so they can run concurrently on
//! separate inputs.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, reachability |
//! | [`AstarPather`] : [`Pather`] | A* |
//!
//! [`ObstacleGrid`] implements both for a bounded grid with an obstacle set.

mod astar;
mod bfs;
mod grid;
mod reach;
mod traits;

pub use astar::{astar_path, find_path};
pub use bfs::bfs_distances;
pub use grid::ObstacleGrid;
pub use reach::reachable;
pub use traits::{AstarPather, Pather};
