//! Decoration placement against room walls and corners.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::tiles::cardinal_wall_count;
use crate::types::{Direction8, FloorSet, Pos};

use super::seed::GenRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecorPlacement {
    /// Floor cells touching at least one wall cardinally.
    AlongWalls,
    /// Floor cells with two or more cardinal walls, then clusters around them.
    InCorners,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecorRule {
    pub name: String,
    pub placement: DecorPlacement,
    pub chance: f64,
    pub chance_if_nearby: f64,
}

/// Assigns each decorated floor cell the index of the rule that claimed it.
/// Rules run in order and never overwrite a cell an earlier rule placed.
pub fn place_decorations(
    floor: &FloorSet,
    rules: &[DecorRule],
    rng: &mut GenRng,
) -> BTreeMap<Pos, usize> {
    let mut placed = BTreeMap::new();
    for (rule_index, rule) in rules.iter().enumerate() {
        match rule.placement {
            DecorPlacement::AlongWalls => {
                place_along_walls(floor, rule, rule_index, &mut placed, rng);
            }
            DecorPlacement::InCorners => {
                place_in_corners(floor, rule, rule_index, &mut placed, rng);
            }
        }
    }
    placed
}

fn place_along_walls(
    floor: &FloorSet,
    rule: &DecorRule,
    rule_index: usize,
    placed: &mut BTreeMap<Pos, usize>,
    rng: &mut GenRng,
) {
    for &cell in floor {
        if placed.contains_key(&cell) || cardinal_wall_count(floor, cell) == 0 {
            continue;
        }
        let nearby = cell.cardinal_neighbors().iter().any(|n| placed.get(n) == Some(&rule_index));
        let chance = if nearby { rule.chance_if_nearby } else { rule.chance };
        if rng.chance(chance) {
            placed.insert(cell, rule_index);
        }
    }
}

fn place_in_corners(
    floor: &FloorSet,
    rule: &DecorRule,
    rule_index: usize,
    placed: &mut BTreeMap<Pos, usize>,
    rng: &mut GenRng,
) {
    let mut corners = Vec::new();
    for &cell in floor {
        if placed.contains_key(&cell) || cardinal_wall_count(floor, cell) < 2 {
            continue;
        }
        if rng.chance(rule.chance) {
            placed.insert(cell, rule_index);
            corners.push(cell);
        }
    }

    let around: BTreeSet<Pos> = corners
        .iter()
        .flat_map(|corner| Direction8::ALL.iter().map(move |&dir| corner.step8(dir)))
        .filter(|cell| floor.contains(cell))
        .collect();
    for cell in around {
        if placed.contains_key(&cell) {
            continue;
        }
        if rng.chance(rule.chance_if_nearby) {
            placed.insert(cell, rule_index);
        }
    }
}
