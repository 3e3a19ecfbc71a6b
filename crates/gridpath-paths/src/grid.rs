use gridpath_core::{Bounds, Cell, ObstacleSet, manhattan_distance};

use crate::traits::{AstarPather, Pather};

/// A bounded grid with impassable cells, moving in 4 directions at unit cost.
///
/// Neighbors come out in left, up, down, right order, which is the order
/// the search breaks equal-cost ties in.
#[derive(Debug, Clone, Copy)]
pub struct ObstacleGrid<'a> {
    bounds: Bounds,
    obstacles: &'a ObstacleSet,
}

impl<'a> ObstacleGrid<'a> {
    pub fn new(bounds: Bounds, obstacles: &'a ObstacleSet) -> Self {
        Self { bounds, obstacles }
    }

    /// Whether `c` is inside the grid and not an obstacle.
    #[inline]
    pub fn passable(&self, c: Cell) -> bool {
        self.bounds.contains(c) && !self.obstacles.contains(&c)
    }
}

impl Pather for ObstacleGrid<'_> {
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        buf.extend(c.neighbors_4().into_iter().filter(|&n| self.passable(n)));
    }
}

impl AstarPather for ObstacleGrid<'_> {
    fn cost(&self, _from: Cell, _to: Cell) -> i32 {
        1
    }

    fn estimate(&self, from: Cell, to: Cell) -> i32 {
        manhattan_distance(from, to)
    }
}
