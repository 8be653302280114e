//! A* over 4-connected floor cells with a Manhattan heuristic.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use crate::types::{FloorSet, Pos};

use super::{NeighborCache, walkable_neighbors};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenNode {
    f: u32,
    h: u32,
    pos: Pos,
}

/// Shortest 4-connected path from `start` to `goal`, both inclusive. Empty when
/// the goal cannot be reached; `[start]` when they coincide.
///
/// A cache passed here must already be bound to the generation of `floor`.
/// An unbound cache is ignored and the search reads `floor` directly.
pub fn find_path(
    start: Pos,
    goal: Pos,
    floor: &FloorSet,
    cache: Option<&mut NeighborCache>,
) -> Vec<Pos> {
    if start == goal {
        return vec![start];
    }
    let mut cache = cache.filter(|cache| cache.generation().is_some());

    let mut open = BinaryHeap::new();
    let mut closed = BTreeSet::new();
    let mut g_score = BTreeMap::from([(start, 0_u32)]);
    let mut came_from = BTreeMap::new();
    let h = start.manhattan(goal);
    open.push(Reverse(OpenNode { f: h, h, pos: start }));

    while let Some(Reverse(node)) = open.pop() {
        let current = node.pos;
        if current == goal {
            return reconstruct_path(&came_from, start, goal);
        }
        if !closed.insert(current) {
            continue;
        }

        let current_g = g_score[&current];
        let neighbors = match cache.as_deref_mut() {
            Some(cache) => cache.neighbors_of(floor, current).to_vec(),
            None => walkable_neighbors(floor, current),
        };
        for neighbor in neighbors {
            if closed.contains(&neighbor) {
                continue;
            }
            let tentative = current_g + 1;
            if tentative < g_score.get(&neighbor).copied().unwrap_or(u32::MAX) {
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative);
                let h = neighbor.manhattan(goal);
                open.push(Reverse(OpenNode { f: tentative + h, h, pos: neighbor }));
            }
        }
    }
    Vec::new()
}

fn reconstruct_path(came_from: &BTreeMap<Pos, Pos>, start: Pos, goal: Pos) -> Vec<Pos> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        let Some(&previous) = came_from.get(&current) else {
            return Vec::new();
        };
        current = previous;
        path.push(current);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::mapgen::bfs_distances;
    use crate::types::Rect;

    fn is_step_path(path: &[Pos], floor: &FloorSet) -> bool {
        path.windows(2).all(|pair| pair[0].manhattan(pair[1]) == 1)
            && path.iter().all(|cell| floor.contains(cell))
    }

    #[test]
    fn path_threads_a_single_gap() {
        // Two 5x5 rooms split by a wall column with one opening at (5, 4).
        let mut floor: FloorSet = Rect::new(0, 0, 11, 5).cells().collect();
        for y in 0..5 {
            if y != 4 {
                floor.remove(&Pos::new(5, y));
            }
        }
        let start = Pos::new(0, 0);
        let goal = Pos::new(10, 0);
        let path = find_path(start, goal, &floor, None);

        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        assert!(path.contains(&Pos::new(5, 4)));
        assert!(is_step_path(&path, &floor));
        assert_eq!(path.len() as u32 - 1, bfs_distances(&floor, start)[&goal]);
    }

    #[test]
    fn enclosed_goal_yields_an_empty_path() {
        let mut floor: FloorSet = Rect::new(0, 0, 7, 7).cells().collect();
        for wall in Pos::new(4, 4).cardinal_neighbors() {
            floor.remove(&wall);
        }
        assert!(find_path(Pos::new(0, 0), Pos::new(4, 4), &floor, None).is_empty());
    }

    #[test]
    fn start_equal_to_goal_is_a_single_cell_path() {
        let floor = FloorSet::from([Pos::new(2, 2)]);
        assert_eq!(find_path(Pos::new(2, 2), Pos::new(2, 2), &floor, None), vec![Pos::new(2, 2)]);
    }

    #[test]
    fn cached_and_uncached_searches_agree() {
        let floor: FloorSet = Rect::new(-3, -3, 9, 6).cells().collect();
        let mut cache = NeighborCache::new();
        cache.bind(0);
        let plain = find_path(Pos::new(-3, -3), Pos::new(5, 2), &floor, None);
        let cached = find_path(Pos::new(-3, -3), Pos::new(5, 2), &floor, Some(&mut cache));
        assert_eq!(plain, cached);
        assert!(!cache.is_empty());
    }

    #[test]
    fn unbound_cache_is_never_filled_or_read() {
        let mut row: FloorSet = Rect::new(0, 0, 5, 1).cells().collect();
        let mut cache = NeighborCache::new();
        assert_eq!(find_path(Pos::new(0, 0), Pos::new(4, 0), &row, Some(&mut cache)).len(), 5);
        assert!(cache.is_empty());

        row.remove(&Pos::new(2, 0));
        assert!(find_path(Pos::new(0, 0), Pos::new(4, 0), &row, Some(&mut cache)).is_empty());
    }

    proptest! {
        #[test]
        fn paths_are_shortest_and_never_revisit_a_cell(
            seed_cells in proptest::collection::btree_set((0_i32..12, 0_i32..12), 20..80),
            goal_index in any::<prop::sample::Index>(),
        ) {
            let floor: FloorSet = seed_cells.into_iter().map(|(x, y)| Pos::new(x, y)).collect();
            let start = *floor.first().expect("non-empty");
            let distances = bfs_distances(&floor, start);
            let cells: Vec<Pos> = floor.iter().copied().collect();
            let goal = cells[goal_index.index(cells.len())];

            let path = find_path(start, goal, &floor, None);
            match distances.get(&goal) {
                Some(&distance) => {
                    prop_assert_eq!(path.len() as u32, distance + 1);
                    prop_assert!(is_step_path(&path, &floor));
                    let unique: BTreeSet<Pos> = path.iter().copied().collect();
                    prop_assert_eq!(unique.len(), path.len());
                }
                None => prop_assert!(path.is_empty()),
            }
        }
    }
}
