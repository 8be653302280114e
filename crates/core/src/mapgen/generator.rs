//! Dungeon generation orchestration: partition, carve, smooth, connect, place.

use tracing::{debug, debug_span, warn};

use crate::error::GenerationError;
use crate::types::{FloorSet, Pos, Rect};

use super::carve::{carve_ellipse_room, carve_rect_room, run_random_walk};
use super::config::{DungeonParameters, RoomStyle};
use super::corridors::connect_rooms_mst;
use super::grid::{find_furthest_reachable, flood_fill};
use super::model::GenerationResult;
use super::partition::binary_space_partition;
use super::seed::GenRng;
use super::smoothing::{apply_cellular_automata, inject_noise, strip_border};

pub struct MapGenerator {
    params: DungeonParameters,
}

impl MapGenerator {
    pub fn new(params: DungeonParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DungeonParameters {
        &self.params
    }

    pub fn generate(&self, seed: u64) -> Result<GenerationResult, GenerationError> {
        let _span = debug_span!("generate_dungeon", seed).entered();
        let params = &self.params;
        params.validate()?;

        let mut rng = GenRng::from_seed(seed);
        let partitioned = self.partition(&mut rng)?;
        let rooms = convert_rooms_to_points(
            partitioned,
            params.fraction_1x1_rooms,
            params.offset,
            &mut rng,
        );
        let room_floor = self.carve_rooms(&rooms, &mut rng);

        let mut floor = FloorSet::new();
        if params.noise_chance > 0.0 {
            for room in &rooms {
                floor.extend(inject_noise(*room, params.noise_chance, &mut rng));
            }
        }
        floor.extend(room_floor.iter().copied());
        if params.border > 0 {
            floor = strip_border(&floor, &rooms, params.border);
        }

        for _ in 0..params.automata_iterations {
            floor = apply_cellular_automata(&floor, 1);
            if params.protect_rooms {
                floor.extend(room_floor.iter().copied());
            }
            if params.border > 0 {
                floor = strip_border(&floor, &rooms, params.border);
            }
        }
        debug!(rooms = rooms.len(), cells = floor.len(), "rooms carved and smoothed");

        if params.corridor_width > 0 {
            let edges = connect_rooms_mst(
                &rooms,
                &mut floor,
                params.corridor_width,
                params.extra_loop_chance,
                &mut rng,
            );
            debug!(corridors = edges.len(), "corridors routed");
        }

        let spawn = rooms[rng.index(rooms.len())].center();
        floor.insert(spawn);
        if params.apply_flood_fill {
            let before = floor.len();
            floor = flood_fill(&floor, spawn);
            debug!(removed = before - floor.len(), "unreachable cells discarded");
        }

        let exit = find_furthest_reachable(&floor, spawn);
        let treasure = params.place_treasure.then(|| find_furthest_reachable(&floor, exit));
        debug!(?spawn, ?exit, ?treasure, cells = floor.len(), "dungeon generated");

        Ok(GenerationResult { floor, spawn, exit, treasure, rooms })
    }

    fn partition(&self, rng: &mut GenRng) -> Result<Vec<Rect>, GenerationError> {
        let params = &self.params;
        let required = params.min_room_count.max(1);
        let mut best = 0;
        for attempt in 1..=params.max_partition_attempts {
            let rooms = binary_space_partition(
                params.bounds(),
                params.min_room_width,
                params.min_room_height,
                rng,
            );
            if rooms.len() >= required {
                debug!(attempt, rooms = rooms.len(), "partition accepted");
                return Ok(rooms);
            }
            best = best.max(rooms.len());
            warn!(attempt, produced = rooms.len(), required, "too few rooms, partitioning again");
        }
        Err(GenerationError::PartitionExhausted {
            attempts: params.max_partition_attempts,
            best,
            required,
        })
    }

    fn carve_rooms(&self, rooms: &[Rect], rng: &mut GenRng) -> FloorSet {
        let params = &self.params;
        let mut floor = FloorSet::new();
        for room in rooms {
            let width = room.width - 2 * params.offset;
            let height = room.height - 2 * params.offset;
            match params.room_style {
                RoomStyle::Rectangle => floor.extend(carve_rect_room(room.center(), width, height)),
                RoomStyle::Ellipse => floor.extend(carve_ellipse_room(room.center(), width, height)),
                RoomStyle::RandomWalk => {
                    let inner = room.shrunk(params.offset);
                    let walk = run_random_walk(&params.random_walk, room.center(), rng);
                    floor.extend(walk.into_iter().filter(|&cell| inner.contains(cell)));
                }
            }
        }
        floor
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomShape {
    Rectangle,
    Ellipse,
}

/// A one-room level centered on `origin`: spawn at the origin, exit on the
/// cell furthest from it.
pub fn generate_single_room(shape: RoomShape, origin: Pos, size: (i32, i32)) -> GenerationResult {
    let (width, height) = size;
    let floor = match shape {
        RoomShape::Rectangle => carve_rect_room(origin, width, height),
        RoomShape::Ellipse => carve_ellipse_room(origin, width, height),
    };
    let room = Rect { origin: origin.offset(-(width / 2), -(height / 2)), width, height };
    let exit = find_furthest_reachable(&floor, origin);
    debug!(?shape, cells = floor.len(), "single room generated");
    GenerationResult { floor, spawn: origin, exit, treasure: None, rooms: vec![room] }
}

/// Turns `fraction` of the rooms, chosen by a seeded shuffle, into point rooms
/// whose carved floor is the single center cell.
fn convert_rooms_to_points(
    mut rooms: Vec<Rect>,
    fraction: f64,
    offset: i32,
    rng: &mut GenRng,
) -> Vec<Rect> {
    let point_count = (rooms.len() as f64 * fraction) as usize;
    let mut is_point: Vec<bool> = (0..rooms.len()).map(|index| index < point_count).collect();
    rng.shuffle(&mut is_point);

    let side = offset * 2 + 1;
    for (room, point) in rooms.iter_mut().zip(is_point) {
        if point {
            let center = room.center();
            *room = Rect { origin: center.offset(-offset, -offset), width: side, height: side };
        }
    }
    rooms
}
