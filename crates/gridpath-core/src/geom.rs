//! Geometry primitives: [`Cell`] and [`Bounds`].
//!
//! Cells are addressed as `(row, col)`, rows growing downwards. Bounds are
//! always anchored at the origin and are validated on construction, so a
//! `Bounds` value in hand always describes a non-empty grid.

use std::fmt;

use crate::error::GridError;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A grid coordinate. Ordering is row-major.
///
/// Coordinates are signed so that the neighbours of an edge cell can be
/// represented before being filtered with [`Bounds::contains`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// The top-left cell.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours in left, up, down, right order.
    ///
    /// No bounds filtering is applied.
    #[inline]
    pub const fn neighbors_4(self) -> [Cell; 4] {
        [
            self.shift(0, -1),
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, 1),
        ]
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        crate::grid::manhattan_distance(self, other) == 1
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (i32, i32) {
    fn from(c: Cell) -> Self {
        (c.row, c.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Largest number of cells a [`Bounds`] may hold.
///
/// Keeps every path cost plus heuristic estimate on the grid within `i32`.
pub const MAX_CELLS: i64 = (i32::MAX / 2) as i64;

/// Grid dimensions: rows `[0, rows)` by columns `[0, cols)`.
///
/// Both dimensions are strictly positive and the cell count is at most
/// [`MAX_CELLS`]; use [`Bounds::new`] to build one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BoundsRepr"))]
pub struct Bounds {
    rows: i32,
    cols: i32,
}

impl Bounds {
    /// Create bounds of `rows` by `cols` cells.
    ///
    /// Returns [`GridError::InvalidBounds`] if either dimension is not
    /// positive or the grid would exceed [`MAX_CELLS`].
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 || rows as i64 * cols as i64 > MAX_CELLS {
            return Err(GridError::InvalidBounds { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Always `false`: validated bounds hold at least one cell.
    #[inline]
    pub fn is_empty(self) -> bool {
        false
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(self, c: Cell) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Fail with [`GridError::OutOfBounds`] unless `c` is inside the grid.
    pub fn check(self, c: Cell) -> Result<(), GridError> {
        if self.contains(c) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { cell: c, bounds: self })
        }
    }

    /// The last cell in row-major order.
    #[inline]
    pub fn last(self) -> Cell {
        Cell::new(self.rows - 1, self.cols - 1)
    }

    /// Row-major iterator over every cell.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: Cell::ORIGIN,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Cell;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BoundsRepr {
    rows: i32,
    cols: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<BoundsRepr> for Bounds {
    type Error = GridError;

    fn try_from(r: BoundsRepr) -> Result<Self, GridError> {
        Bounds::new(r.rows, r.cols)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Cell,
}

impl Iterator for BoundsIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.cur.row >= self.bounds.rows {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.bounds.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cur.row >= self.bounds.rows {
            return (0, Some(0));
        }
        let w = self.bounds.cols as usize;
        let remaining_in_row = (self.bounds.cols - self.cur.col) as usize;
        let remaining_rows = (self.bounds.rows - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn cell_new_and_shift() {
        let c = Cell::new(2, 3);
        assert_eq!(c.shift(1, -1), Cell::new(3, 2));
        assert_eq!(c.shift(-2, -3), Cell::ORIGIN);
    }

    #[test]
    fn cell_neighbors_order() {
        let n = Cell::new(5, 5).neighbors_4();
        assert_eq!(
            n,
            [
                Cell::new(5, 4),
                Cell::new(4, 5),
                Cell::new(6, 5),
                Cell::new(5, 6),
            ]
        );
    }

    #[test]
    fn cell_adjacency() {
        let c = Cell::new(1, 1);
        assert!(c.is_adjacent(Cell::new(0, 1)));
        assert!(c.is_adjacent(Cell::new(1, 2)));
        assert!(!c.is_adjacent(Cell::new(2, 2)));
        assert!(!c.is_adjacent(c));
    }

    #[test]
    fn cell_ordering_is_row_major() {
        let mut v = vec![Cell::new(1, 0), Cell::new(0, 2), Cell::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 0)]);
    }

    #[test]
    fn cell_hash_by_coordinates() {
        let mut set = HashSet::new();
        set.insert(Cell::new(1, 2));
        set.insert(Cell::from((1, 2)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn cell_display() {
        assert_eq!(Cell::new(3, -1).to_string(), "(3, -1)");
    }

    #[test]
    fn bounds_rejects_non_positive() {
        assert_eq!(
            Bounds::new(0, 4),
            Err(GridError::InvalidBounds { rows: 0, cols: 4 })
        );
        assert!(Bounds::new(3, -2).is_err());
        assert!(Bounds::new(1, 1).is_ok());
    }

    #[test]
    fn bounds_rejects_too_many_cells() {
        assert_eq!(
            Bounds::new(i32::MAX, i32::MAX),
            Err(GridError::InvalidBounds {
                rows: i32::MAX,
                cols: i32::MAX,
            })
        );
        assert!(Bounds::new(1 << 15, 1 << 15).is_err());
        let widest = Bounds::new(1, MAX_CELLS as i32).unwrap();
        assert_eq!(widest.len() as i64, MAX_CELLS);
        assert!(Bounds::new(2, MAX_CELLS as i32).is_err());
    }

    #[test]
    fn bounds_contains() {
        let b = Bounds::new(3, 4).unwrap();
        assert!(b.contains(Cell::new(0, 0)));
        assert!(b.contains(Cell::new(2, 3)));
        assert!(!b.contains(Cell::new(3, 0)));
        assert!(!b.contains(Cell::new(0, 4)));
        assert!(!b.contains(Cell::new(-1, 0)));
        assert!(!b.contains(Cell::new(0, -1)));
    }

    #[test]
    fn bounds_check_reports_cell() {
        let b = Bounds::new(2, 2).unwrap();
        assert!(b.check(Cell::new(1, 1)).is_ok());
        assert_eq!(
            b.check(Cell::new(2, 0)),
            Err(GridError::OutOfBounds {
                cell: Cell::new(2, 0),
                bounds: b,
            })
        );
    }

    #[test]
    fn bounds_iter_row_major() {
        let b = Bounds::new(2, 3).unwrap();
        let cells: Vec<Cell> = b.iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[2], Cell::new(0, 2));
        assert_eq!(cells[3], Cell::new(1, 0));
        assert_eq!(cells[5], b.last());
    }

    #[test]
    fn bounds_iter_exact_size() {
        let b = Bounds::new(3, 5).unwrap();
        let mut it = b.iter();
        assert_eq!(it.len(), 15);
        for _ in 0..6 {
            it.next();
        }
        assert_eq!(it.len(), 9);
        assert_eq!(it.count(), 9);
    }

    #[test]
    fn bounds_display() {
        assert_eq!(Bounds::new(16, 24).unwrap().to_string(), "16x24");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_round_trip() {
        let c = Cell::new(4, 9);
        let json = serde_json::to_string(&c).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn bounds_round_trip() {
        let b = Bounds::new(16, 24).unwrap();
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#"{"rows":16,"cols":24}"#);
        let back: Bounds = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }

    #[test]
    fn bounds_deserialize_validates() {
        let r: Result<Bounds, _> = serde_json::from_str(r#"{"rows":0,"cols":3}"#);
        assert!(r.is_err());
    }
}
