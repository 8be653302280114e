//! Grid navigation over generated floor sets.
//! A [`NavGrid`] owns the walkable floor and a generation stamp; each caller
//! keeps its own [`NeighborCache`] and binds it to the grid's generation.
//! Stamps come from one process-wide counter, so no two floors share one even
//! across separately constructed grids.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{FloorSet, Pos};

mod pathfinding;
mod roster;
mod scheduler;

pub use pathfinding::find_path;
pub use roster::{AgentId, AgentRoster};
pub use scheduler::{AgentPathState, PathScheduler, line_of_sight};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(0);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// Clones share a generation with their source until either replaces its floor.
#[derive(Clone, Debug)]
pub struct NavGrid {
    floor: FloorSet,
    generation: u64,
}

impl Default for NavGrid {
    fn default() -> Self {
        Self::new(FloorSet::new())
    }
}

impl NavGrid {
    pub fn new(floor: FloorSet) -> Self {
        Self { floor, generation: next_generation() }
    }

    pub fn floor(&self) -> &FloorSet {
        &self.floor
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_walkable(&self, pos: Pos) -> bool {
        self.floor.contains(&pos)
    }

    /// Swaps in a regenerated floor; caches bound to the old one go stale.
    pub fn replace_floor(&mut self, floor: FloorSet) {
        self.floor = floor;
        self.generation = next_generation();
    }

    pub fn find_path(&self, start: Pos, goal: Pos, cache: &mut NeighborCache) -> Vec<Pos> {
        cache.bind(self.generation);
        find_path(start, goal, &self.floor, Some(cache))
    }
}

/// Memoized walkable cardinal neighbors for one floor generation of one grid.
#[derive(Clone, Debug, Default)]
pub struct NeighborCache {
    generation: Option<u64>,
    neighbors: BTreeMap<Pos, Vec<Pos>>,
}

impl NeighborCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the cache when `generation` differs from the one it was filled for.
    pub fn bind(&mut self, generation: u64) {
        if self.generation != Some(generation) {
            self.neighbors.clear();
            self.generation = Some(generation);
        }
    }

    pub fn generation(&self) -> Option<u64> {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub(crate) fn neighbors_of(&mut self, floor: &FloorSet, pos: Pos) -> &[Pos] {
        self.neighbors.entry(pos).or_insert_with(|| walkable_neighbors(floor, pos))
    }
}

pub(crate) fn walkable_neighbors(floor: &FloorSet, pos: Pos) -> Vec<Pos> {
    pos.cardinal_neighbors().into_iter().filter(|neighbor| floor.contains(neighbor)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    #[test]
    fn cache_survives_rebinding_to_the_same_generation() {
        let grid = NavGrid::new(Rect::new(0, 0, 4, 4).cells().collect());
        let mut cache = NeighborCache::new();
        grid.find_path(Pos::new(0, 0), Pos::new(3, 3), &mut cache);
        let filled = cache.len();
        assert!(filled > 0);

        cache.bind(grid.generation());
        assert_eq!(cache.len(), filled);
    }

    #[test]
    fn replacing_the_floor_invalidates_bound_caches() {
        let mut grid = NavGrid::new(Rect::new(0, 0, 5, 1).cells().collect());
        let mut cache = NeighborCache::new();
        assert_eq!(grid.find_path(Pos::new(0, 0), Pos::new(4, 0), &mut cache).len(), 5);

        let mut cut = grid.floor().clone();
        cut.remove(&Pos::new(2, 0));
        let before = grid.generation();
        grid.replace_floor(cut);
        assert_ne!(grid.generation(), before);
        assert!(grid.find_path(Pos::new(0, 0), Pos::new(4, 0), &mut cache).is_empty());
        assert_eq!(cache.generation(), Some(grid.generation()));
    }

    #[test]
    fn separately_built_grids_never_share_cached_neighbors() {
        let row: FloorSet = Rect::new(0, 0, 5, 1).cells().collect();
        let first = NavGrid::new(row.clone());
        let mut cache = NeighborCache::new();
        assert_eq!(first.find_path(Pos::new(0, 0), Pos::new(4, 0), &mut cache).len(), 5);

        let mut cut = row;
        cut.remove(&Pos::new(2, 0));
        let second = NavGrid::new(cut);
        assert_ne!(second.generation(), first.generation());
        assert!(second.find_path(Pos::new(0, 0), Pos::new(4, 0), &mut cache).is_empty());
        assert_eq!(cache.generation(), Some(second.generation()));
    }

    #[test]
    fn cloned_grids_diverge_once_either_floor_is_replaced() {
        let mut original = NavGrid::new(Rect::new(0, 0, 3, 3).cells().collect());
        let copy = original.clone();
        assert_eq!(copy.generation(), original.generation());

        original.replace_floor(FloorSet::from([Pos::new(0, 0)]));
        assert_ne!(copy.generation(), original.generation());
    }
}
