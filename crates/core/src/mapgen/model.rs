//! Public data model for a generated dungeon level.

use std::hash::Hasher;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::Xxh3;

use crate::types::{FloorSet, Pos, Rect};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub floor: FloorSet,
    pub spawn: Pos,
    pub exit: Pos,
    pub treasure: Option<Pos>,
    pub rooms: Vec<Rect>,
}

impl GenerationResult {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.floor.len() * 8 + 64);
        bytes.extend((self.floor.len() as u32).to_le_bytes());
        for cell in &self.floor {
            bytes.extend(cell.y.to_le_bytes());
            bytes.extend(cell.x.to_le_bytes());
        }
        for marker in [Some(self.spawn), Some(self.exit), self.treasure] {
            match marker {
                Some(pos) => {
                    bytes.push(1);
                    bytes.extend(pos.y.to_le_bytes());
                    bytes.extend(pos.x.to_le_bytes());
                }
                None => bytes.push(0),
            }
        }
        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            bytes.extend(room.origin.y.to_le_bytes());
            bytes.extend(room.origin.x.to_le_bytes());
            bytes.extend(room.width.to_le_bytes());
            bytes.extend(room.height.to_le_bytes());
        }
        bytes
    }

    /// Stable xxh3 digest of [`Self::canonical_bytes`].
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write(&self.canonical_bytes());
        hasher.finish()
    }

    pub fn is_floor(&self, pos: Pos) -> bool {
        self.floor.contains(&pos)
    }

    /// Index of the first room whose bounds contain `pos`.
    pub fn room_containing(&self, pos: Pos) -> Option<usize> {
        self.rooms.iter().position(|room| room.contains(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GenerationResult {
        GenerationResult {
            floor: [Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0)].into(),
            spawn: Pos::new(0, 0),
            exit: Pos::new(2, 0),
            treasure: None,
            rooms: vec![Rect::new(0, -1, 3, 3)],
        }
    }

    #[test]
    fn fingerprint_tracks_every_field() {
        let base = sample();
        let mut moved_exit = sample();
        moved_exit.exit = Pos::new(1, 0);
        let mut with_treasure = sample();
        with_treasure.treasure = Some(Pos::new(2, 0));

        assert_eq!(base.fingerprint(), sample().fingerprint());
        assert_ne!(base.fingerprint(), moved_exit.fingerprint());
        assert_ne!(base.fingerprint(), with_treasure.fingerprint());
    }

    #[test]
    fn room_lookup_uses_room_bounds() {
        let result = sample();
        assert_eq!(result.room_containing(Pos::new(1, 1)), Some(0));
        assert_eq!(result.room_containing(Pos::new(3, 0)), None);
    }

    #[test]
    fn result_survives_json_transport() {
        let result = sample();
        let json = serde_json::to_string(&result).expect("serialize");
        let decoded: GenerationResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, result);
    }
}
