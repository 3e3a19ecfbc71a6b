//! Randomized Prim's maze generation.
//!
//! The maze grows from a random cell. Each step removes a random cell from
//! the frontier and carves it only if exactly one of its orthogonal
//! neighbours is already carved, so the carved cells always form a tree.

use std::collections::HashSet;

use gridpath_core::{Bounds, Cell, ObstacleSet, orthogonal_neighbors};
use rand::{Rng, RngExt};

use crate::frontier::Frontier;

/// Generate a maze over `bounds`, returning the set of passable cells.
///
/// The result is connected and loop-free. Cells outside it are walls; every
/// wall bordering the maze borders at least two maze cells.
pub fn generate_maze(bounds: Bounds, rng: &mut impl Rng) -> HashSet<Cell> {
    let start = Cell::new(
        rng.random_range(0..bounds.rows()),
        rng.random_range(0..bounds.cols()),
    );

    let mut maze: HashSet<Cell> = HashSet::new();
    let mut frontier = Frontier::new();
    let mut peak = 0;

    maze.insert(start);
    for n in orthogonal_neighbors(start, bounds) {
        frontier.insert(n);
    }

    while let Some(candidate) = frontier.take_random(rng) {
        peak = peak.max(frontier.len() + 1);
        let carved = orthogonal_neighbors(candidate, bounds)
            .into_iter()
            .filter(|n| maze.contains(n))
            .count();
        if carved != 1 {
            continue;
        }
        maze.insert(candidate);
        for n in orthogonal_neighbors(candidate, bounds) {
            if !maze.contains(&n) {
                frontier.insert(n);
            }
        }
    }

    log::debug!(
        "maze {bounds}: carved {} of {} cells from {start}, peak frontier {peak}",
        maze.len(),
        bounds.len()
    );
    maze
}

/// [`generate_maze`] seeded from the thread-local generator.
pub fn generate_maze_default(bounds: Bounds) -> HashSet<Cell> {
    generate_maze(bounds, &mut rand::rng())
}

/// The walls of `maze`: every cell of `bounds` not in it.
pub fn maze_walls(maze: &HashSet<Cell>, bounds: Bounds) -> ObstacleSet {
    bounds.iter().filter(|c| !maze.contains(c)).collect()
}
