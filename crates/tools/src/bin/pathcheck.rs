use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use dungeon_core::mapgen::{bfs_distances, flood_fill};
use dungeon_core::{
    DungeonParameters, NavGrid, NeighborCache, RoomStyle, find_path, generate_dungeon,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tools::config::load_parameters;
use tools::logging;
use tracing::{debug, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of levels to generate and check
    #[arg(short, long, default_value_t = 200)]
    levels: u32,
    /// Base parameters; room style varies per level
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn check_level(params: &DungeonParameters, level_seed: u64) -> Result<()> {
    let result = generate_dungeon(params, level_seed)?;

    let reachable = flood_fill(&result.floor, result.spawn);
    if params.apply_flood_fill && reachable.len() != result.floor.len() {
        bail!("Invariant failed: unreachable floor on seed {level_seed}");
    }
    if let Some(room) = result.rooms.iter().find(|room| !reachable.contains(&room.center())) {
        bail!("Invariant failed: room {room:?} cut off from spawn on seed {level_seed}");
    }

    let distances = bfs_distances(&result.floor, result.spawn);
    let furthest = distances.values().copied().max().unwrap_or(0);
    if distances.get(&result.exit) != Some(&furthest) {
        bail!("Invariant failed: exit is not the furthest reachable cell on seed {level_seed}");
    }

    let nav = NavGrid::new(result.floor.clone());
    let mut cache = NeighborCache::new();
    let path = nav.find_path(result.spawn, result.exit, &mut cache);
    if path.len() as u32 != furthest + 1 {
        bail!("Invariant failed: A* path length {} on seed {level_seed}", path.len());
    }
    if let Some(treasure) = result.treasure
        && find_path(result.exit, treasure, &result.floor, None).is_empty()
    {
        bail!("Invariant failed: treasure unreachable on seed {level_seed}");
    }

    debug!(level_seed, cells = result.floor.len(), "level ok");
    Ok(())
}

fn main() -> Result<()> {
    logging::init("dungeon_core=warn,pathcheck=info");
    let args = Args::parse();

    let base = match &args.config {
        Some(path) => load_parameters(path)?,
        None => DungeonParameters::default(),
    };
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    info!(seed = args.seed, levels = args.levels, "starting path check sweep");

    for _ in 0..args.levels {
        let styles = [RoomStyle::RandomWalk, RoomStyle::Rectangle, RoomStyle::Ellipse];
        let params = DungeonParameters {
            room_style: choose(&mut rng, &styles),
            apply_flood_fill: choose(&mut rng, &[true, false]),
            ..base.clone()
        };
        check_level(&params, rng.next_u64())?;
    }

    println!("Path check completed successfully for {} levels.", args.levels);
    Ok(())
}
