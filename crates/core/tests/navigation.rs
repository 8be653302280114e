use dungeon_core::mapgen::{GenRng, bfs_distances, room_spawn_sites};
use dungeon_core::nav::line_of_sight;
use dungeon_core::{
    AgentId, AgentRoster, DungeonParameters, NavGrid, NeighborCache, PathScheduler, Pos, find_path,
    generate_dungeon,
};

fn level_params() -> DungeonParameters {
    DungeonParameters {
        width: 60,
        height: 48,
        min_room_width: 8,
        min_room_height: 8,
        min_room_count: 4,
        ..Default::default()
    }
}

#[test]
fn test_navigation_spawn_to_exit_path_is_shortest() {
    for seed in [1_u64, 2, 3, 40, 500] {
        let result = generate_dungeon(&level_params(), seed).expect("generation failed");
        let path = find_path(result.spawn, result.exit, &result.floor, None);
        let distance = bfs_distances(&result.floor, result.spawn)[&result.exit];

        assert_eq!(path.first(), Some(&result.spawn));
        assert_eq!(path.last(), Some(&result.exit));
        assert_eq!(path.len() as u32, distance + 1, "seed {seed}");
        assert!(path.windows(2).all(|pair| pair[0].manhattan(pair[1]) == 1));
    }
}

#[test]
fn test_navigation_grid_cache_matches_uncached_search() {
    let result = generate_dungeon(&level_params(), 77).expect("generation failed");
    let nav = NavGrid::new(result.floor.clone());
    let mut cache = NeighborCache::new();

    let cached = nav.find_path(result.spawn, result.exit, &mut cache);
    let again = nav.find_path(result.spawn, result.exit, &mut cache);
    let plain = find_path(result.spawn, result.exit, &result.floor, None);
    assert_eq!(cached, plain);
    assert_eq!(again, plain);
    assert_eq!(cache.generation(), Some(nav.generation()));
}

#[test]
fn test_navigation_regenerated_floor_invalidates_cached_neighbors() {
    let first = generate_dungeon(&level_params(), 10).expect("generation failed");
    let second = generate_dungeon(&level_params(), 11).expect("generation failed");
    let mut nav = NavGrid::new(first.floor.clone());
    let mut cache = NeighborCache::new();
    nav.find_path(first.spawn, first.exit, &mut cache);

    nav.replace_floor(second.floor.clone());
    let path = nav.find_path(second.spawn, second.exit, &mut cache);
    assert_eq!(path, find_path(second.spawn, second.exit, &second.floor, None));
    assert!(path.iter().all(|cell| second.floor.contains(cell)));
}

#[test]
fn test_navigation_fresh_grid_per_level_reuses_one_cache_safely() {
    let mut cache = NeighborCache::new();
    for seed in [20_u64, 21, 22] {
        let result = generate_dungeon(&level_params(), seed).expect("generation failed");
        let nav = NavGrid::new(result.floor.clone());
        let path = nav.find_path(result.spawn, result.exit, &mut cache);
        assert_eq!(path, find_path(result.spawn, result.exit, &result.floor, None), "seed {seed}");
    }
}

#[test]
fn test_navigation_roster_agents_steer_toward_reachable_waypoints() {
    let result = generate_dungeon(&level_params(), 2468).expect("generation failed");
    let nav = NavGrid::new(result.floor.clone());
    let mut cache = NeighborCache::new();
    let sites = room_spawn_sites(&result, &mut GenRng::from_seed(8));
    assert!(!sites.is_empty());

    let mut roster = AgentRoster::new(PathScheduler::default());
    let agents: Vec<_> = sites.iter().map(|site| (roster.register(), site.pos)).collect();
    let tile_of = |id: AgentId| agents.iter().find(|(agent, _)| *agent == id).map(|(_, pos)| *pos);
    let target = result.spawn;

    let steering = roster.tick_all(&nav, &mut cache, target, tile_of);
    assert_eq!(steering.len(), agents.len());
    for (id, direction) in steering {
        let tile: Pos = tile_of(id).expect("registered agent");
        let state = roster.get(id).expect("registered agent");
        if line_of_sight(nav.floor(), tile, target) {
            assert!(state.waypoints.is_empty());
        } else {
            let waypoint = state.current_waypoint.expect("path computed on first tick");
            assert!(nav.is_walkable(waypoint));
            assert_eq!(state.waypoints.last(), Some(&target));
            assert!(line_of_sight(nav.floor(), tile, waypoint));
        }
        if tile != target {
            assert!((direction.length() - 1.0).abs() < 1e-5, "steering must be a unit vector");
        }
    }
}
