//! Noise injection, border stripping, and cellular-automata smoothing.

use crate::types::{FloorSet, Pos, Rect};

use super::seed::GenRng;

const MAX_WALLS_FOR_FLOOR: u32 = 4;

/// Smallest rectangle holding every floor cell, `None` for an empty set.
pub fn bounding_box(floor: &FloorSet) -> Option<Rect> {
    let first = floor.first()?;
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
    for cell in floor {
        min_x = min_x.min(cell.x);
        max_x = max_x.max(cell.x);
        min_y = min_y.min(cell.y);
        max_y = max_y.max(cell.y);
    }
    Some(Rect::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
}

/// Runs `iterations` generations of the "floor if at most four walls in the
/// 3x3 block" rule over the bounding box of the current set.
pub fn apply_cellular_automata(floor: &FloorSet, iterations: u32) -> FloorSet {
    let mut current = floor.clone();
    for _ in 0..iterations {
        let Some(bounds) = bounding_box(&current) else {
            break;
        };
        let next: FloorSet = bounds
            .cells()
            .filter(|&cell| wall_count_3x3(&current, cell) <= MAX_WALLS_FOR_FLOOR)
            .collect();
        current = next;
    }
    current
}

fn wall_count_3x3(floor: &FloorSet, center: Pos) -> u32 {
    let mut walls = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if !floor.contains(&center.offset(dx, dy)) {
                walls += 1;
            }
        }
    }
    walls
}

/// Each cell of `region` independently with probability `chance`.
pub fn inject_noise(region: Rect, chance: f64, rng: &mut GenRng) -> FloorSet {
    region.cells().filter(|_| rng.chance(chance)).collect()
}

/// Removes every floor cell lying within `border_width` of an edge of any room.
pub fn strip_border(floor: &FloorSet, rooms: &[Rect], border_width: i32) -> FloorSet {
    let mut stripped = floor.clone();
    for room in rooms {
        for cell in room.cells() {
            let i = cell.x - room.min_x();
            let j = cell.y - room.min_y();
            if i < border_width
                || i >= room.width - border_width
                || j < border_width
                || j >= room.height - border_width
            {
                stripped.remove(&cell);
            }
        }
    }
    stripped
}
