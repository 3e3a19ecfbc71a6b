//! Precondition failures shared by every gridpath algorithm.

use std::fmt;

use crate::geom::{Bounds, Cell, MAX_CELLS};

/// Errors raised when an algorithm is handed malformed input.
///
/// Finding no path is not an error; these only describe calls that were
/// rejected before any work was done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Grid dimensions must both be positive and within the cell limit.
    InvalidBounds { rows: i32, cols: i32 },
    /// A cell that must lie inside the grid does not.
    OutOfBounds { cell: Cell, bounds: Bounds },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { rows, cols } => {
                write!(
                    f,
                    "invalid grid bounds {rows}x{cols}: dimensions must be positive \
                     and hold at most {MAX_CELLS} cells"
                )
            }
            Self::OutOfBounds { cell, bounds } => {
                write!(f, "cell {cell} is outside the {bounds} grid")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_bounds() {
        let e = GridError::InvalidBounds { rows: 0, cols: 5 };
        assert_eq!(
            e.to_string(),
            format!(
                "invalid grid bounds 0x5: dimensions must be positive and hold at most {MAX_CELLS} cells"
            )
        );
    }

    #[test]
    fn display_out_of_bounds() {
        let e = GridError::OutOfBounds {
            cell: Cell::new(3, 7),
            bounds: Bounds::new(3, 3).unwrap(),
        };
        assert_eq!(e.to_string(), "cell (3, 7) is outside the 3x3 grid");
    }
}
