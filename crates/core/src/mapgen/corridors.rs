//! Corridor routing: a Kruskal minimum spanning tree over room centers, extra
//! loop edges drawn at random, and thick 4-connected line rasterization.

use std::cmp::Ordering;

use crate::types::{FloorSet, Pos, Rect};

use super::seed::GenRng;

/// A corridor between two rooms, by index into the room list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CorridorEdge {
    pub from: usize,
    pub to: usize,
}

struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self { parent: (0..len).collect(), rank: vec![0; len] }
    }

    fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the two sets; false when they were already joined.
    fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }
        match self.rank[left_root].cmp(&self.rank[right_root]) {
            Ordering::Less => self.parent[left_root] = right_root,
            Ordering::Greater => self.parent[right_root] = left_root,
            Ordering::Equal => {
                self.parent[right_root] = left_root;
                self.rank[left_root] += 1;
            }
        }
        true
    }
}

/// Picks the corridor edges between room centers: the full minimum spanning
/// tree plus each remaining edge with probability `extra_loop_chance`.
pub fn select_corridor_edges(
    centers: &[Pos],
    extra_loop_chance: f64,
    rng: &mut GenRng,
) -> Vec<CorridorEdge> {
    let mut candidates = Vec::new();
    for from in 0..centers.len() {
        for to in (from + 1)..centers.len() {
            let weight = squared_distance(centers[from], centers[to]);
            candidates.push((weight, CorridorEdge { from, to }));
        }
    }
    candidates.sort();

    let mut sets = DisjointSet::new(centers.len());
    let mut selected = Vec::new();
    let mut leftovers = Vec::new();
    for (_, edge) in candidates {
        if sets.union(edge.from, edge.to) {
            selected.push(edge);
        } else {
            leftovers.push(edge);
        }
    }
    for edge in leftovers {
        if rng.chance(extra_loop_chance) {
            selected.push(edge);
        }
    }
    selected
}

/// Connects every room center with corridors `width` cells wide, writing them
/// into `floor`. Returns the edges that were carved.
pub fn connect_rooms_mst(
    rooms: &[Rect],
    floor: &mut FloorSet,
    width: i32,
    extra_loop_chance: f64,
    rng: &mut GenRng,
) -> Vec<CorridorEdge> {
    let centers: Vec<Pos> = rooms.iter().map(|room| room.center()).collect();
    let edges = select_corridor_edges(&centers, extra_loop_chance, rng);
    for edge in &edges {
        carve_corridor(floor, centers[edge.from], centers[edge.to], width);
    }
    edges
}

/// Writes a thick corridor from `start` to `end` into `floor`.
pub fn carve_corridor(floor: &mut FloorSet, start: Pos, end: Pos, width: i32) {
    let horizontal = (end.x - start.x).abs() >= (end.y - start.y).abs();
    let low = -((width - 1) / 2);
    let high = width / 2;
    for point in four_connected_line(start, end) {
        for shift in low..=high {
            let cell = if horizontal { point.offset(0, shift) } else { point.offset(shift, 0) };
            floor.insert(cell);
        }
    }
}

/// Bresenham line from `start` to `end` inclusive. Every diagonal step also
/// emits the horizontal corner cell, so consecutive cells share an edge.
pub fn four_connected_line(start: Pos, end: Pos) -> Vec<Pos> {
    let dx = (end.x - start.x).abs();
    let dy = -(end.y - start.y).abs();
    let step_x = if start.x < end.x { 1 } else { -1 };
    let step_y = if start.y < end.y { 1 } else { -1 };
    let mut error = dx + dy;
    let mut current = start;
    let mut cells = vec![current];

    while current != end {
        let doubled = 2 * error;
        let move_x = doubled >= dy;
        let move_y = doubled <= dx;
        if move_x {
            error += dy;
            current.x += step_x;
        }
        if move_x && move_y {
            cells.push(current);
        }
        if move_y {
            error += dx;
            current.y += step_y;
        }
        cells.push(current);
    }
    cells
}

fn squared_distance(a: Pos, b: Pos) -> i64 {
    let dx = i64::from(a.x - b.x);
    let dy = i64::from(a.y - b.y);
    dx * dx + dy * dy
}
