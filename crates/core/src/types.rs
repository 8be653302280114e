//! Grid primitives shared by generation, tile derivation, and navigation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Walkable cells. Ordered so that iteration, and therefore every random draw
/// made while iterating, is reproducible.
pub type FloorSet = BTreeSet<Pos>;

/// A cell coordinate on the integer grid. North is `+y`.
///
/// Ordering is row-major (`y` then `x`), which is what every ordered set of
/// cells in this crate iterates by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { y: self.y + dy, x: self.x + dx }
    }

    pub fn step(self, direction: Direction4) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }

    pub fn step8(self, direction: Direction8) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }

    pub fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn cardinal_neighbors(self) -> [Self; 4] {
        Direction4::ALL.map(|direction| self.step(direction))
    }
}

/// Axis-aligned rectangle: `origin` is the minimum corner, the extent is
/// `width` x `height` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Pos,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { origin: Pos { y, x }, width, height }
    }

    pub fn min_x(self) -> i32 {
        self.origin.x
    }

    pub fn min_y(self) -> i32 {
        self.origin.y
    }

    /// Exclusive upper x bound.
    pub fn max_x(self) -> i32 {
        self.origin.x + self.width
    }

    /// Exclusive upper y bound.
    pub fn max_y(self) -> i32 {
        self.origin.y + self.height
    }

    /// Center cell, rounding toward the minimum corner.
    pub fn center(self) -> Pos {
        Pos {
            y: self.origin.y + self.height.div_euclid(2),
            x: self.origin.x + self.width.div_euclid(2),
        }
    }

    pub fn contains(self, pos: Pos) -> bool {
        pos.x >= self.min_x() && pos.x < self.max_x() && pos.y >= self.min_y() && pos.y < self.max_y()
    }

    pub fn area(self) -> i64 {
        i64::from(self.width.max(0)) * i64::from(self.height.max(0))
    }

    /// Rectangle shrunk by `margin` on every side; may become empty.
    pub fn shrunk(self, margin: i32) -> Self {
        Self {
            origin: self.origin.offset(margin, margin),
            width: (self.width - 2 * margin).max(0),
            height: (self.height - 2 * margin).max(0),
        }
    }

    /// Every cell of the rectangle in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Pos> {
        (self.min_y()..self.max_y())
            .flat_map(move |y| (self.min_x()..self.max_x()).map(move |x| Pos { y, x }))
    }
}

/// Cardinal directions in the order neighbor lookups visit them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction4 {
    North,
    East,
    South,
    West,
}

impl Direction4 {
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }
}

/// The eight compass directions, clockwise from north. This order is also the
/// bit order of tile neighbor masks (north is the most significant bit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction8 {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction8 {
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::NorthEast => (1, 1),
            Self::East => (1, 0),
            Self::SouthEast => (1, -1),
            Self::South => (0, -1),
            Self::SouthWest => (-1, -1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, 1),
        }
    }

    /// Bit assigned to this direction in an 8-neighbor mask.
    pub const fn mask_bit(self) -> u8 {
        1 << (7 - self as u8)
    }
}
