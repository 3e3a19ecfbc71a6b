//! Flood-fill reachability.

use std::collections::HashSet;

use gridpath_core::Cell;

use crate::traits::Pather;

/// Return the set of cells connected to `start` through `pather`.
///
/// `start` is always part of the result, even if the pather would not list
/// it as anyone's neighbor.
pub fn reachable<P: Pather>(pather: &P, start: Cell) -> HashSet<Cell> {
    let mut seen: HashSet<Cell> = HashSet::new();
    let mut stack = vec![start];
    let mut nbuf = Vec::with_capacity(4);
    seen.insert(start);

    // Iterative DFS.
    while let Some(c) = stack.pop() {
        nbuf.clear();
        pather.neighbors(c, &mut nbuf);
        for &n in nbuf.iter() {
            if seen.insert(n) {
                stack.push(n);
            }
        }
    }

    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ObstacleGrid;
    use gridpath_core::{Bounds, ObstacleSet};

    #[test]
    fn whole_open_grid() {
        let b = Bounds::new(4, 6).unwrap();
        let none = ObstacleSet::new();
        let r = reachable(&ObstacleGrid::new(b, &none), Cell::new(3, 5));
        assert_eq!(r.len(), b.len());
    }

    #[test]
    fn split_by_wall() {
        let b = Bounds::new(3, 5).unwrap();
        let wall: ObstacleSet = (0..3).map(|row| Cell::new(row, 2)).collect();
        let grid = ObstacleGrid::new(b, &wall);
        let left = reachable(&grid, Cell::new(0, 0));
        assert_eq!(left.len(), 6);
        assert!(left.iter().all(|c| c.col < 2));
        let right = reachable(&grid, Cell::new(2, 4));
        assert_eq!(right.len(), 6);
        assert!(left.is_disjoint(&right));
    }
}
