//! Text views of a generated level for terminals and logs.

use dungeon_core::mapgen::bounding_box;
use dungeon_core::tiles::find_walls;
use dungeon_core::{FloorSet, GenerationResult, Pos};
use serde::Serialize;

/// Row-per-line view, north at the top: `#` wall, `.` floor, `S` spawn,
/// `E` exit, `T` treasure. Cells that are neither floor nor wall are blank.
pub fn render_ascii(result: &GenerationResult) -> String {
    let walls = find_walls(&result.floor);
    let Some(bounds) = bounding_box(&walls) else {
        return String::new();
    };

    let mut out = String::with_capacity(((bounds.width + 1) * bounds.height) as usize);
    for y in (bounds.min_y()..bounds.max_y()).rev() {
        let mut line = String::with_capacity(bounds.width as usize);
        for x in bounds.min_x()..bounds.max_x() {
            line.push(glyph(result, &walls, Pos::new(x, y)));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn glyph(result: &GenerationResult, walls: &FloorSet, pos: Pos) -> char {
    if pos == result.spawn {
        'S'
    } else if pos == result.exit {
        'E'
    } else if result.treasure == Some(pos) {
        'T'
    } else if result.floor.contains(&pos) {
        '.'
    } else if walls.contains(&pos) {
        '#'
    } else {
        ' '
    }
}

/// Compact machine-readable description of a level.
#[derive(Debug, Serialize)]
pub struct LevelSummary {
    pub seed: u64,
    pub fingerprint: String,
    pub floor_cells: usize,
    pub rooms: usize,
    pub spawn: Pos,
    pub exit: Pos,
    pub treasure: Option<Pos>,
}

impl LevelSummary {
    pub fn new(seed: u64, result: &GenerationResult) -> Self {
        Self {
            seed,
            fingerprint: format!("{:016x}", result.fingerprint()),
            floor_cells: result.floor.len(),
            rooms: result.rooms.len(),
            spawn: result.spawn,
            exit: result.exit,
            treasure: result.treasure,
        }
    }
}
