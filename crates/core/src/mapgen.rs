//! Procedural dungeon generation split into coherent submodules.

pub mod config;
pub mod model;

mod carve;
mod corridors;
mod decor;
mod generator;
mod grid;
mod partition;
mod seed;
mod smoothing;
mod spawns;

pub use carve::{
    carve_ellipse_room, carve_rect_room, random_walk, run_random_walk, straight_corridor,
};
pub use config::{DungeonParameters, RandomWalkParameters, RoomStyle};
pub use corridors::{
    CorridorEdge, carve_corridor, connect_rooms_mst, four_connected_line, select_corridor_edges,
};
pub use decor::{DecorPlacement, DecorRule, place_decorations};
pub use generator::{MapGenerator, RoomShape, generate_single_room};
pub use grid::{bfs_distances, find_furthest_reachable, flood_fill};
pub use model::GenerationResult;
pub use partition::binary_space_partition;
pub use seed::GenRng;
pub use smoothing::{apply_cellular_automata, bounding_box, inject_noise, strip_border};
pub use spawns::{SpawnSite, room_spawn_sites};

use crate::error::GenerationError;

pub fn generate_dungeon(
    params: &DungeonParameters,
    seed: u64,
) -> Result<GenerationResult, GenerationError> {
    MapGenerator::new(params.clone()).generate(seed)
}
