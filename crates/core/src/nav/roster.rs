//! Registry of chasing agents sharing one scheduler.

use glam::Vec2;
use slotmap::{SlotMap, new_key_type};

use crate::types::Pos;

use super::scheduler::{AgentPathState, PathScheduler};
use super::{NavGrid, NeighborCache};

new_key_type! {
    pub struct AgentId;
}

/// Hands out stagger offsets round-robin so recomputation spreads evenly over
/// the scheduler period.
#[derive(Clone, Debug)]
pub struct AgentRoster {
    scheduler: PathScheduler,
    agents: SlotMap<AgentId, AgentPathState>,
    next_offset: u32,
}

impl AgentRoster {
    pub fn new(scheduler: PathScheduler) -> Self {
        Self { scheduler, agents: SlotMap::with_key(), next_offset: 0 }
    }

    pub fn register(&mut self) -> AgentId {
        let offset = self.next_offset;
        self.next_offset = (self.next_offset + 1) % self.scheduler.period();
        self.agents.insert(AgentPathState::new(offset))
    }

    pub fn remove(&mut self, id: AgentId) -> Option<AgentPathState> {
        self.agents.remove(id)
    }

    pub fn get(&self, id: AgentId) -> Option<&AgentPathState> {
        self.agents.get(id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn tick(
        &mut self,
        id: AgentId,
        nav: &NavGrid,
        cache: &mut NeighborCache,
        self_tile: Pos,
        target_tile: Pos,
    ) -> Option<Vec2> {
        let state = self.agents.get_mut(id)?;
        Some(self.scheduler.tick(nav, cache, state, self_tile, target_tile))
    }

    /// Ticks every registered agent toward `target_tile`. Agents `tile_of`
    /// cannot place are skipped.
    pub fn tick_all(
        &mut self,
        nav: &NavGrid,
        cache: &mut NeighborCache,
        target_tile: Pos,
        tile_of: impl Fn(AgentId) -> Option<Pos>,
    ) -> Vec<(AgentId, Vec2)> {
        let scheduler = self.scheduler;
        self.agents
            .iter_mut()
            .filter_map(|(id, state)| {
                let self_tile = tile_of(id)?;
                Some((id, scheduler.tick(nav, cache, state, self_tile, target_tile)))
            })
            .collect()
    }
}
