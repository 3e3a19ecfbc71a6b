use std::collections::{HashMap, VecDeque};

use gridpath_core::Cell;

use crate::traits::Pather;

/// Compute a breadth-first search distance map from `source`.
///
/// Each step has cost 1. The map holds every cell reachable through
/// `pather`, including `source` at distance 0.
pub fn bfs_distances<P: Pather>(pather: &P, source: Cell) -> HashMap<Cell, i32> {
    let mut dist: HashMap<Cell, i32> = HashMap::new();
    let mut queue: VecDeque<Cell> = VecDeque::new();
    let mut nbuf = Vec::with_capacity(4);

    dist.insert(source, 0);
    queue.push_back(source);

    while let Some(c) = queue.pop_front() {
        let d = dist[&c];
        nbuf.clear();
        pather.neighbors(c, &mut nbuf);

        for &n in nbuf.iter() {
            if dist.contains_key(&n) {
                continue;
            }
            dist.insert(n, d + 1);
            queue.push_back(n);
        }
    }

    log::trace!("bfs from {source}: {} cells reached", dist.len());
    dist
}
