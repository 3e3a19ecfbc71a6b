//! Stateless grid helpers: bounds test, orthogonal adjacency, distance.

use std::collections::HashSet;

use crate::geom::{Bounds, Cell};

/// Cells marked impassable by the caller.
pub type ObstacleSet = HashSet<Cell>;

/// Whether `cell` lies inside `bounds`.
#[inline]
pub fn in_bounds(cell: Cell, bounds: Bounds) -> bool {
    bounds.contains(cell)
}

/// In-bounds orthogonal neighbours of `cell`, in left, up, down, right order.
///
/// Corners yield 2 cells, edges 3, interior cells 4. A 1-wide grid can
/// yield fewer.
pub fn orthogonal_neighbors(cell: Cell, bounds: Bounds) -> Vec<Cell> {
    cell.neighbors_4()
        .into_iter()
        .filter(|&n| bounds.contains(n))
        .collect()
}

/// Manhattan (L1) distance between two cells, saturating at `i32::MAX`.
#[inline]
pub fn manhattan_distance(a: Cell, b: Cell) -> i32 {
    let d = (a.row as i64 - b.row as i64).abs() + (a.col as i64 - b.col as i64).abs();
    d.min(i32::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(rows: i32, cols: i32) -> Bounds {
        Bounds::new(rows, cols).unwrap()
    }

    #[test]
    fn in_bounds_edges() {
        let bounds = b(16, 24);
        assert!(in_bounds(Cell::new(15, 23), bounds));
        assert!(!in_bounds(Cell::new(16, 23), bounds));
        assert!(!in_bounds(Cell::new(0, -1), bounds));
    }

    #[test]
    fn neighbors_of_corner() {
        let n = orthogonal_neighbors(Cell::new(0, 0), b(3, 3));
        assert_eq!(n, vec![Cell::new(1, 0), Cell::new(0, 1)]);
    }

    #[test]
    fn neighbors_of_edge() {
        let n = orthogonal_neighbors(Cell::new(0, 1), b(3, 3));
        assert_eq!(n, vec![Cell::new(0, 0), Cell::new(1, 1), Cell::new(0, 2)]);
    }

    #[test]
    fn neighbors_of_interior() {
        let n = orthogonal_neighbors(Cell::new(1, 1), b(3, 3));
        assert_eq!(
            n,
            vec![
                Cell::new(1, 0),
                Cell::new(0, 1),
                Cell::new(2, 1),
                Cell::new(1, 2),
            ]
        );
    }

    #[test]
    fn neighbors_single_cell_grid() {
        assert!(orthogonal_neighbors(Cell::ORIGIN, b(1, 1)).is_empty());
    }

    #[test]
    fn neighbors_of_corridor() {
        let n = orthogonal_neighbors(Cell::new(0, 2), b(1, 5));
        assert_eq!(n, vec![Cell::new(0, 1), Cell::new(0, 3)]);
    }

    #[test]
    fn manhattan() {
        assert_eq!(manhattan_distance(Cell::new(0, 0), Cell::new(2, 2)), 4);
        assert_eq!(manhattan_distance(Cell::new(3, 1), Cell::new(0, 5)), 7);
        assert_eq!(manhattan_distance(Cell::new(4, 4), Cell::new(4, 4)), 0);
    }

    #[test]
    fn manhattan_far_apart_saturates() {
        let a = Cell::new(i32::MIN, i32::MIN);
        let c = Cell::new(i32::MAX, i32::MAX);
        assert_eq!(manhattan_distance(a, c), i32::MAX);
        assert_eq!(
            manhattan_distance(Cell::ORIGIN, Cell::new(i32::MAX - 1, 0)),
            i32::MAX - 1
        );
    }

    #[test]
    fn manhattan_symmetric() {
        let a = Cell::new(7, 2);
        let c = Cell::new(1, 9);
        assert_eq!(manhattan_distance(a, c), manhattan_distance(c, a));
    }
}
