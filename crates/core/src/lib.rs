pub mod error;
pub mod mapgen;
pub mod nav;
pub mod tiles;
pub mod types;

pub use error::{ConfigError, GenerationError};
pub use mapgen::{DungeonParameters, GenerationResult, MapGenerator, RoomStyle, generate_dungeon};
pub use nav::{
    AgentId, AgentPathState, AgentRoster, NavGrid, NeighborCache, PathScheduler, find_path,
};
pub use tiles::{TileLayout, derive_tiles};
pub use types::*;
