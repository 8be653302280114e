//! Wall derivation and 8-neighbor tile masks for rendering a floor set.
//!
//! Mask bits follow [`Direction8::ALL`]: north is bit 7, then clockwise down to
//! north-west at bit 0. A bit is set when the neighbor in that direction is of
//! the same kind as the cell, floor for floor cells and wall for wall cells.
//! Atlases keyed the other way round (floor bits set for non-floor neighbors,
//! wall bits set for floor neighbors) need `!mask` for floor cells and
//! `neighbor_mask(wall, |pos| floor.contains(&pos))` for walls.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::types::{Direction8, FloorSet, Pos};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayout {
    pub floor: BTreeMap<Pos, u8>,
    pub walls: BTreeMap<Pos, u8>,
}

/// Non-floor cells 8-adjacent to some floor cell.
pub fn find_walls(floor: &FloorSet) -> BTreeSet<Pos> {
    let mut walls = BTreeSet::new();
    for &cell in floor {
        for direction in Direction8::ALL {
            let neighbor = cell.step8(direction);
            if !floor.contains(&neighbor) {
                walls.insert(neighbor);
            }
        }
    }
    walls
}

pub fn neighbor_mask(cell: Pos, same_kind: impl Fn(Pos) -> bool) -> u8 {
    Direction8::ALL
        .into_iter()
        .filter(|&direction| same_kind(cell.step8(direction)))
        .fold(0, |mask, direction| mask | direction.mask_bit())
}

pub fn derive_tiles(floor: &FloorSet) -> TileLayout {
    let walls = find_walls(floor);
    let floor_masks = floor
        .iter()
        .map(|&cell| (cell, neighbor_mask(cell, |pos| floor.contains(&pos))))
        .collect();
    let wall_masks = walls
        .iter()
        .map(|&cell| (cell, neighbor_mask(cell, |pos| walls.contains(&pos))))
        .collect();
    TileLayout { floor: floor_masks, walls: wall_masks }
}

/// How many of the four cardinal neighbors of `pos` are not floor.
pub fn cardinal_wall_count(floor: &FloorSet, pos: Pos) -> u32 {
    pos.cardinal_neighbors().iter().filter(|neighbor| !floor.contains(neighbor)).count() as u32
}
