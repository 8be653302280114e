//! Breadth-first connectivity queries over floor sets.

use std::collections::{BTreeMap, VecDeque};

use crate::types::{FloorSet, Pos};

/// Cells 4-connected to `start`. Empty when `start` is not floor.
pub fn flood_fill(floor: &FloorSet, start: Pos) -> FloorSet {
    let mut reached = FloorSet::new();
    if !floor.contains(&start) {
        return reached;
    }

    let mut queue = VecDeque::from([start]);
    reached.insert(start);
    while let Some(current) = queue.pop_front() {
        for neighbor in current.cardinal_neighbors() {
            if floor.contains(&neighbor) && reached.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    reached
}

/// BFS step distance from `start` to every reachable floor cell.
pub fn bfs_distances(floor: &FloorSet, start: Pos) -> BTreeMap<Pos, u32> {
    let mut distances = BTreeMap::new();
    if !floor.contains(&start) {
        return distances;
    }

    let mut queue = VecDeque::from([start]);
    distances.insert(start, 0);
    while let Some(current) = queue.pop_front() {
        let next_distance = distances[&current] + 1;
        for neighbor in current.cardinal_neighbors() {
            if floor.contains(&neighbor) && !distances.contains_key(&neighbor) {
                distances.insert(neighbor, next_distance);
                queue.push_back(neighbor);
            }
        }
    }
    distances
}

/// The reachable cell with the greatest BFS distance from `start`. Among equally
/// distant cells the first one dequeued wins. Returns `start` when it is not floor.
pub fn find_furthest_reachable(floor: &FloorSet, start: Pos) -> Pos {
    if !floor.contains(&start) {
        return start;
    }

    let mut visited = FloorSet::from([start]);
    let mut queue = VecDeque::from([(start, 0_u32)]);
    let mut furthest = start;
    let mut furthest_distance = 0_u32;
    while let Some((current, distance)) = queue.pop_front() {
        if distance > furthest_distance {
            furthest = current;
            furthest_distance = distance;
        }
        for neighbor in current.cardinal_neighbors() {
            if floor.contains(&neighbor) && visited.insert(neighbor) {
                queue.push_back((neighbor, distance + 1));
            }
        }
    }
    furthest
}
