//! Error types surfaced by generation and scheduling setup.
//!
//! Unreachable path goals and empty floor sets are ordinary results, not errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("dungeon bounds must be at least 1x1, got {width}x{height}")]
    EmptyBounds { width: i32, height: i32 },
    #[error("minimum room size must be at least 1x1, got {width}x{height}")]
    ZeroRoomSize { width: i32, height: i32 },
    #[error(
        "minimum room size {room_width}x{room_height} does not fit in dungeon bounds {width}x{height}"
    )]
    RoomLargerThanBounds { room_width: i32, room_height: i32, width: i32, height: i32 },
    #[error("at most {max_rooms} rooms fit in the dungeon bounds but {required} are required")]
    UnreachableRoomCount { required: usize, max_rooms: usize },
    #[error("`{field}` must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },
    #[error("`{field}` must not be negative, got {value}")]
    NegativeSize { field: &'static str, value: i32 },
    #[error("`max_partition_attempts` must be at least 1")]
    ZeroRetryCap,
    #[error("stagger period must be at least 1")]
    ZeroStaggerPeriod,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("invalid dungeon parameters: {0}")]
    Config(#[from] ConfigError),
    #[error(
        "partition produced at most {best} rooms in {attempts} attempts, {required} are required"
    )]
    PartitionExhausted { attempts: u32, best: usize, required: usize },
}
