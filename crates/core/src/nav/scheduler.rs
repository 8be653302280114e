//! Staggered path recomputation and steering for chasing agents.

use glam::Vec2;
use tracing::trace;

use crate::error::ConfigError;
use crate::mapgen::four_connected_line;
use crate::types::{FloorSet, Pos};

use super::{NavGrid, NeighborCache};

/// Per-agent chase bookkeeping carried between ticks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentPathState {
    pub last_target_tile: Option<Pos>,
    pub last_self_tile: Option<Pos>,
    pub waypoints: Vec<Pos>,
    pub current_waypoint: Option<Pos>,
    pub needs_recompute: bool,
    pub stagger_offset: u32,
    pub stagger_counter: u32,
}

impl AgentPathState {
    pub fn new(stagger_offset: u32) -> Self {
        Self {
            last_target_tile: None,
            last_self_tile: None,
            waypoints: Vec::new(),
            current_waypoint: None,
            needs_recompute: true,
            stagger_offset,
            stagger_counter: 0,
        }
    }

    fn on_current_waypoint(&self, self_tile: Pos) -> bool {
        self.current_waypoint == Some(self_tile)
    }
}

/// True when every cell of the 4-connected line between the two tiles is floor.
pub fn line_of_sight(floor: &FloorSet, from: Pos, to: Pos) -> bool {
    four_connected_line(from, to).iter().all(|cell| floor.contains(cell))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathScheduler {
    period: u32,
}

impl PathScheduler {
    pub const DEFAULT_PERIOD: u32 = 4;

    pub fn new(period: u32) -> Result<Self, ConfigError> {
        if period == 0 {
            return Err(ConfigError::ZeroStaggerPeriod);
        }
        Ok(Self { period })
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    /// Runs one scheduling step for an agent and returns its unit steering
    /// vector, or zero when it already stands on its destination.
    pub fn tick(
        &self,
        nav: &NavGrid,
        cache: &mut NeighborCache,
        state: &mut AgentPathState,
        self_tile: Pos,
        target_tile: Pos,
    ) -> Vec2 {
        self.check_recompute(state, self_tile, target_tile);
        self.steer(nav, cache, state, self_tile, target_tile)
    }

    /// Flags a recompute when the agent or its target changed tiles, but only
    /// on the agent's stagger slot unless it has run out of waypoints.
    pub fn check_recompute(&self, state: &mut AgentPathState, self_tile: Pos, target_tile: Pos) {
        state.stagger_counter = (state.stagger_counter + 1) % self.period;
        let on_slot = state.stagger_counter == state.stagger_offset % self.period;
        let on_waypoint = state.on_current_waypoint(self_tile);
        if !on_slot && !on_waypoint && !state.waypoints.is_empty() {
            return;
        }
        if state.needs_recompute {
            return;
        }
        if state.last_target_tile != Some(target_tile)
            || state.last_self_tile != Some(self_tile)
            || on_waypoint
        {
            state.last_target_tile = Some(target_tile);
            state.last_self_tile = Some(self_tile);
            state.needs_recompute = true;
        }
    }

    fn steer(
        &self,
        nav: &NavGrid,
        cache: &mut NeighborCache,
        state: &mut AgentPathState,
        self_tile: Pos,
        target_tile: Pos,
    ) -> Vec2 {
        if line_of_sight(nav.floor(), self_tile, target_tile) {
            state.waypoints.clear();
            return direction(self_tile, target_tile);
        }

        if state.needs_recompute {
            let mut path = nav.find_path(self_tile, target_tile, cache);
            trim_to_visible_suffix(&mut path, nav.floor(), self_tile);
            trace!(?self_tile, ?target_tile, waypoints = path.len(), "path recomputed");
            state.current_waypoint = Some(path.first().copied().unwrap_or(self_tile));
            state.waypoints = path;
            state.last_self_tile = Some(self_tile);
            state.last_target_tile = Some(target_tile);
            state.needs_recompute = false;
        }

        direction(self_tile, state.current_waypoint.unwrap_or(self_tile))
    }
}

impl Default for PathScheduler {
    fn default() -> Self {
        Self { period: Self::DEFAULT_PERIOD }
    }
}

/// Drops the waypoints before the furthest one the agent can already see.
fn trim_to_visible_suffix(path: &mut Vec<Pos>, floor: &FloorSet, self_tile: Pos) {
    let visible = path.iter().rposition(|&waypoint| line_of_sight(floor, self_tile, waypoint));
    if let Some(visible) = visible {
        path.drain(..visible);
    }
}

fn direction(from: Pos, to: Pos) -> Vec2 {
    Vec2::new((to.x - from.x) as f32, (to.y - from.y) as f32).normalize_or_zero()
}
