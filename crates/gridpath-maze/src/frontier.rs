use std::collections::HashMap;

use gridpath_core::Cell;
use rand::{Rng, RngExt};

/// Set of candidate cells with O(1) insert, uniform random pick and removal.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    cells: Vec<Cell>,
    pos: HashMap<Cell, usize>,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, c: Cell) -> bool {
        self.pos.contains_key(&c)
    }

    /// Add `c` unless already present.
    pub(crate) fn insert(&mut self, c: Cell) {
        if self.pos.contains_key(&c) {
            return;
        }
        self.pos.insert(c, self.cells.len());
        self.cells.push(c);
    }

    /// Remove and return a uniformly chosen cell.
    pub(crate) fn take_random(&mut self, rng: &mut impl Rng) -> Option<Cell> {
        if self.cells.is_empty() {
            return None;
        }
        let i = rng.random_range(0..self.cells.len());
        let c = self.cells.swap_remove(i);
        self.pos.remove(&c);
        if let Some(&moved) = self.cells.get(i) {
            self.pos.insert(moved, i);
        }
        Some(c)
    }
}
