use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use gridpath_core::{Bounds, Cell, GridError, ObstacleSet};

use crate::grid::ObstacleGrid;
use crate::traits::AstarPather;

/// Book-keeping for one discovered cell during a search.
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    /// `None` only for the start cell.
    parent: Option<Cell>,
    g: i32,
    f: i32,
    /// Sequence number of the heap entry that currently represents this node.
    seq: u64,
}

/// Heap entry, ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// `f` first and, among equal `f`, the entry pushed earliest.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenRef {
    f: i32,
    seq: u64,
    cell: Cell,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute a shortest path from `start` to `goal` using A*.
///
/// The returned path starts with the cell after `start` and ends with `goal`.
/// It is empty if `start == goal` or if `goal` cannot be reached.
///
/// Ties on `f` are broken first-in first-out: the cell whose current costs
/// were recorded earliest is expanded first. A cell is never reopened once
/// expanded, which is only optimal for a consistent heuristic.
pub fn astar_path<P: AstarPather>(pather: &P, start: Cell, goal: Cell) -> Vec<Cell> {
    let mut open: HashMap<Cell, SearchNode> = HashMap::new();
    let mut closed: HashMap<Cell, SearchNode> = HashMap::new();
    let mut heap: BinaryHeap<OpenRef> = BinaryHeap::new();
    let mut seq: u64 = 0;

    open.insert(
        start,
        SearchNode {
            parent: None,
            g: 0,
            f: 0,
            seq,
        },
    );
    heap.push(OpenRef {
        f: 0,
        seq,
        cell: start,
    });

    let mut nbuf = Vec::with_capacity(4);

    while let Some(entry) = heap.pop() {
        let current = entry.cell;
        let Some(&node) = open.get(&current) else {
            // Already expanded.
            continue;
        };
        if node.seq != entry.seq {
            // Superseded by a cheaper entry.
            continue;
        }

        if current == goal {
            let path = reconstruct(&closed, start, goal, node.parent);
            log::debug!(
                "astar {start} -> {goal}: {} steps, {} cells expanded",
                path.len(),
                closed.len()
            );
            return path;
        }

        open.remove(&current);
        closed.insert(current, node);

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &next in nbuf.iter() {
            if closed.contains_key(&next) {
                continue;
            }
            let g = node.g.saturating_add(pather.cost(current, next));
            let f = g.saturating_add(pather.estimate(next, goal));

            if let Some(existing) = open.get(&next) {
                if existing.f <= f {
                    continue;
                }
            }

            seq += 1;
            open.insert(
                next,
                SearchNode {
                    parent: Some(current),
                    g,
                    f,
                    seq,
                },
            );
            heap.push(OpenRef { f, seq, cell: next });
        }
    }

    log::debug!(
        "astar {start} -> {goal}: no path, {} cells expanded",
        closed.len()
    );
    Vec::new()
}

/// Follow parent links from `goal` back to `start`, excluding `start`.
fn reconstruct(
    closed: &HashMap<Cell, SearchNode>,
    start: Cell,
    goal: Cell,
    goal_parent: Option<Cell>,
) -> Vec<Cell> {
    if goal == start {
        return Vec::new();
    }
    let mut path = vec![goal];
    let mut cur = goal_parent;
    while let Some(c) = cur {
        if c == start {
            break;
        }
        path.push(c);
        cur = closed.get(&c).and_then(|n| n.parent);
    }
    path.reverse();
    path
}

/// Shortest 4-directional path from `start` to `goal` avoiding `obstacles`.
///
/// Returns the cells after `start` up to and including `goal`, or an empty
/// path if there is none. Obstacles on `start` are ignored; an obstacle on
/// `goal` makes it unreachable.
///
/// Fails with [`GridError::OutOfBounds`] if `start` or `goal` lies outside
/// `bounds`.
pub fn find_path(
    start: Cell,
    goal: Cell,
    obstacles: &ObstacleSet,
    bounds: Bounds,
) -> Result<Vec<Cell>, GridError> {
    bounds.check(start)?;
    bounds.check(goal)?;
    let grid = ObstacleGrid::new(bounds, obstacles);
    Ok(astar_path(&grid, start, goal))
}
