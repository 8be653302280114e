//! Tunable parameters for one dungeon generation run and their validation.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{Pos, Rect};

/// How the floor of each partitioned room is carved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStyle {
    #[default]
    RandomWalk,
    Rectangle,
    Ellipse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomWalkParameters {
    pub iterations: u32,
    pub walk_length: u32,
    pub start_randomly_each_iteration: bool,
}

impl Default for RandomWalkParameters {
    fn default() -> Self {
        Self { iterations: 10, walk_length: 10, start_randomly_each_iteration: true }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonParameters {
    pub min_room_width: i32,
    pub min_room_height: i32,
    pub origin: Pos,
    pub width: i32,
    pub height: i32,
    /// Partitioning is retried while it yields fewer rooms than this.
    pub min_room_count: usize,
    /// Gap between a room's bounds and its carved floor; noise may fill it.
    pub offset: i32,
    pub noise_chance: f64,
    /// Margin along each room edge that is always wall.
    pub border: i32,
    pub room_style: RoomStyle,
    pub random_walk: RandomWalkParameters,
    pub fraction_1x1_rooms: f64,
    pub corridor_width: i32,
    pub extra_loop_chance: f64,
    pub automata_iterations: u32,
    pub protect_rooms: bool,
    pub apply_flood_fill: bool,
    pub place_treasure: bool,
    pub max_partition_attempts: u32,
}

impl Default for DungeonParameters {
    fn default() -> Self {
        Self {
            min_room_width: 12,
            min_room_height: 12,
            origin: Pos::new(0, 0),
            width: 90,
            height: 90,
            min_room_count: 3,
            offset: 1,
            noise_chance: 0.5,
            border: 1,
            room_style: RoomStyle::RandomWalk,
            random_walk: RandomWalkParameters::default(),
            fraction_1x1_rooms: 0.1,
            corridor_width: 1,
            extra_loop_chance: 0.15,
            automata_iterations: 2,
            protect_rooms: true,
            apply_flood_fill: true,
            place_treasure: true,
            max_partition_attempts: 64,
        }
    }
}

impl DungeonParameters {
    pub fn bounds(&self) -> Rect {
        Rect { origin: self.origin, width: self.width, height: self.height }
    }

    /// Upper bound on how many rooms a partition of the bounds can emit.
    pub fn max_room_count(&self) -> usize {
        let columns = (self.width / self.min_room_width.max(1)).max(0) as usize;
        let rows = (self.height / self.min_room_height.max(1)).max(0) as usize;
        columns * rows
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 1 || self.height < 1 {
            return Err(ConfigError::EmptyBounds { width: self.width, height: self.height });
        }
        if self.min_room_width < 1 || self.min_room_height < 1 {
            return Err(ConfigError::ZeroRoomSize {
                width: self.min_room_width,
                height: self.min_room_height,
            });
        }
        if self.min_room_width > self.width || self.min_room_height > self.height {
            return Err(ConfigError::RoomLargerThanBounds {
                room_width: self.min_room_width,
                room_height: self.min_room_height,
                width: self.width,
                height: self.height,
            });
        }
        let max_rooms = self.max_room_count();
        if self.min_room_count > max_rooms {
            return Err(ConfigError::UnreachableRoomCount {
                required: self.min_room_count,
                max_rooms,
            });
        }
        for (field, value) in [
            ("noise_chance", self.noise_chance),
            ("fraction_1x1_rooms", self.fraction_1x1_rooms),
            ("extra_loop_chance", self.extra_loop_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { field, value });
            }
        }
        for (field, value) in [
            ("offset", self.offset),
            ("border", self.border),
            ("corridor_width", self.corridor_width),
        ] {
            if value < 0 {
                return Err(ConfigError::NegativeSize { field, value });
            }
        }
        if self.max_partition_attempts == 0 {
            return Err(ConfigError::ZeroRetryCap);
        }
        Ok(())
    }
}
