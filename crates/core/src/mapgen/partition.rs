//! Binary space partitioning of the dungeon bounds into room rectangles.

use std::collections::VecDeque;

use crate::types::Rect;

use super::seed::GenRng;

/// Splits `region` breadth-first until no piece can be cut in two along an axis
/// that is at least twice its minimum. Pieces smaller than the minimum in
/// either axis are discarded, so every returned room satisfies both minimums.
pub fn binary_space_partition(
    region: Rect,
    min_width: i32,
    min_height: i32,
    rng: &mut GenRng,
) -> Vec<Rect> {
    let mut queue = VecDeque::from([region]);
    let mut rooms = Vec::new();

    while let Some(room) = queue.pop_front() {
        if room.width < min_width || room.height < min_height {
            continue;
        }
        let can_split_horizontally = room.height >= min_height * 2;
        let can_split_vertically = room.width >= min_width * 2;
        let prefer_horizontal = rng.coin();

        let split = if prefer_horizontal {
            if can_split_horizontally {
                Some(split_horizontally(room, rng))
            } else if can_split_vertically {
                Some(split_vertically(room, rng))
            } else {
                None
            }
        } else if can_split_vertically {
            Some(split_vertically(room, rng))
        } else if can_split_horizontally {
            Some(split_horizontally(room, rng))
        } else {
            None
        };

        match split {
            Some((first, second)) => {
                queue.push_back(first);
                queue.push_back(second);
            }
            None => rooms.push(room),
        }
    }

    rooms
}

fn split_vertically(room: Rect, rng: &mut GenRng) -> (Rect, Rect) {
    let x_split = rng.range_i32(1, room.width);
    let left = Rect { origin: room.origin, width: x_split, height: room.height };
    let right = Rect {
        origin: room.origin.offset(x_split, 0),
        width: room.width - x_split,
        height: room.height,
    };
    (left, right)
}

fn split_horizontally(room: Rect, rng: &mut GenRng) -> (Rect, Rect) {
    let y_split = rng.range_i32(1, room.height);
    let bottom = Rect { origin: room.origin, width: room.width, height: y_split };
    let top = Rect {
        origin: room.origin.offset(0, y_split),
        width: room.width,
        height: room.height - y_split,
    };
    (bottom, top)
}
