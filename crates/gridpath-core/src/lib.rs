//! **gridpath-core** — the grid model shared by the gridpath algorithms.
//!
//! Provides [`Cell`] and [`Bounds`], the [`ObstacleSet`] alias, the
//! [`GridError`] precondition type and the stateless adjacency helpers used by
//! both the A* path finder and the maze generator.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Bounds, BoundsIter, Cell, MAX_CELLS};
pub use grid::{ObstacleSet, in_bounds, manhattan_distance, orthogonal_neighbors};
