//! Per-room spawn site selection for generated levels.

use serde::{Deserialize, Serialize};

use crate::types::Pos;

use super::model::GenerationResult;
use super::seed::GenRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpawnSite {
    pub room_index: usize,
    pub pos: Pos,
}

/// One uniformly random floor cell per room, skipping the first room that holds
/// the spawn point and any room whose rectangle has no floor left in it.
pub fn room_spawn_sites(result: &GenerationResult, rng: &mut GenRng) -> Vec<SpawnSite> {
    let start_room = result.room_containing(result.spawn);
    let mut sites = Vec::with_capacity(result.rooms.len());
    for (room_index, room) in result.rooms.iter().enumerate() {
        if Some(room_index) == start_room {
            continue;
        }
        let candidates: Vec<Pos> = room.cells().filter(|cell| result.floor.contains(cell)).collect();
        if candidates.is_empty() {
            continue;
        }
        let pos = candidates[rng.index(candidates.len())];
        sites.push(SpawnSite { room_index, pos });
    }
    sites
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FloorSet, Rect};

    fn three_rooms() -> GenerationResult {
        let rooms = vec![Rect::new(0, 0, 4, 4), Rect::new(10, 0, 4, 4), Rect::new(20, 0, 4, 4)];
        let mut floor = FloorSet::new();
        floor.extend(rooms[0].cells());
        floor.extend(rooms[1].cells());
        GenerationResult {
            floor,
            spawn: Pos::new(1, 1),
            exit: Pos::new(12, 2),
            treasure: None,
            rooms,
        }
    }

    #[test]
    fn spawn_room_and_empty_rooms_get_no_site() {
        let result = three_rooms();
        let sites = room_spawn_sites(&result, &mut GenRng::from_seed(4));
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].room_index, 1);
        assert!(result.rooms[1].contains(sites[0].pos));
        assert!(result.floor.contains(&sites[0].pos));
    }

    #[test]
    fn sites_follow_the_seed() {
        let result = three_rooms();
        let a = room_spawn_sites(&result, &mut GenRng::from_seed(21));
        let b = room_spawn_sites(&result, &mut GenRng::from_seed(21));
        assert_eq!(a, b);
    }
}
