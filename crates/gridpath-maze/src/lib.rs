//! Randomized maze generation for gridpath grids.
//!
//! [`generate_maze`] grows a spanning tree of passable cells with a
//! randomized variant of Prim's algorithm. The random source is passed in so
//! callers choose between reproducible (seeded) and fresh mazes;
//! [`generate_maze_default`] uses the thread-local generator.

mod frontier;
pub mod prim;

pub use prim::{generate_maze, generate_maze_default, maze_walls};
