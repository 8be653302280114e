//! Room floor carving: filled rectangles, ellipses, random walks and straight
//! corridor runs.

use crate::types::{FloorSet, Pos};

use super::config::RandomWalkParameters;
use super::seed::GenRng;

/// Every cell of the `width` x `height` rectangle centered on `center`.
pub fn carve_rect_room(center: Pos, width: i32, height: i32) -> FloorSet {
    let mut floor = FloorSet::new();
    for i in 0..width {
        for j in 0..height {
            floor.insert(center.offset(i - width / 2, j - height / 2));
        }
    }
    floor
}

/// Cells whose centers fall inside the ellipse inscribed in the
/// `width` x `height` rectangle centered on `center`.
pub fn carve_ellipse_room(center: Pos, width: i32, height: i32) -> FloorSet {
    let mut floor = FloorSet::new();
    if width <= 0 || height <= 0 {
        return floor;
    }
    let a = f64::from(width) / 2.0;
    let b = f64::from(height) / 2.0;
    for i in 0..width {
        for j in 0..height {
            let px = f64::from(i) + 0.5 - a;
            let py = f64::from(j) + 0.5 - b;
            if (px * px) / (a * a) + (py * py) / (b * b) <= 1.0 {
                floor.insert(center.offset(i - width / 2, j - height / 2));
            }
        }
    }
    floor
}

/// A single drunkard walk of `steps` cardinal moves, including the start cell.
pub fn random_walk(start: Pos, steps: u32, rng: &mut GenRng) -> FloorSet {
    let mut path = FloorSet::from([start]);
    let mut current = start;
    for _ in 0..steps {
        current = rng.cardinal_step(current);
        path.insert(current);
    }
    path
}

/// A straight run of `length` steps in one random cardinal direction. The
/// returned cells start at `start` and stay in walk order.
pub fn straight_corridor(start: Pos, length: u32, rng: &mut GenRng) -> Vec<Pos> {
    let direction = rng.cardinal();
    let mut corridor = Vec::with_capacity(length as usize + 1);
    let mut current = start;
    corridor.push(current);
    for _ in 0..length {
        current = current.step(direction);
        corridor.push(current);
    }
    corridor
}

/// Repeated walks from `start`; with `start_randomly_each_iteration` each new
/// walk begins on a cell carved so far.
pub fn run_random_walk(params: &RandomWalkParameters, start: Pos, rng: &mut GenRng) -> FloorSet {
    let mut floor = FloorSet::new();
    let mut current = start;
    for _ in 0..params.iterations {
        floor.extend(random_walk(current, params.walk_length, rng));
        if params.start_randomly_each_iteration
            && let Some(&next) = floor.iter().nth(rng.index(floor.len()))
        {
            current = next;
        }
    }
    floor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_room_covers_centered_block() {
        let floor = carve_rect_room(Pos::new(10, 10), 4, 3);
        assert_eq!(floor.len(), 12);
        assert!(floor.contains(&Pos::new(8, 9)));
        assert!(floor.contains(&Pos::new(11, 11)));
        assert!(!floor.contains(&Pos::new(12, 10)));
    }

    #[test]
    fn degenerate_sizes_carve_nothing() {
        assert!(carve_rect_room(Pos::new(0, 0), 0, 5).is_empty());
        assert!(carve_ellipse_room(Pos::new(0, 0), 3, -1).is_empty());
    }

    #[test]
    fn ellipse_room_is_inside_its_rectangle_and_drops_corners() {
        let center = Pos::new(0, 0);
        let ellipse = carve_ellipse_room(center, 9, 7);
        let rect = carve_rect_room(center, 9, 7);
        assert!(ellipse.is_subset(&rect));
        assert!(ellipse.contains(&center));
        assert!(!ellipse.contains(&Pos::new(-4, -3)));
        assert!(ellipse.len() < rect.len());
    }

    #[test]
    fn single_cell_ellipse_keeps_its_center() {
        assert_eq!(carve_ellipse_room(Pos::new(3, 4), 1, 1), FloorSet::from([Pos::new(3, 4)]));
    }

    #[test]
    fn random_walk_is_four_connected_and_bounded_by_steps() {
        let mut rng = GenRng::from_seed(5);
        let start = Pos::new(0, 0);
        let walk = random_walk(start, 30, &mut rng);
        assert!(walk.contains(&start));
        assert!(walk.len() <= 31);
        for cell in &walk {
            assert!(cell.manhattan(start) <= 30);
        }
    }

    #[test]
    fn straight_corridor_runs_in_a_single_direction() {
        let start = Pos::new(4, -2);
        let corridor = straight_corridor(start, 6, &mut GenRng::from_seed(21));
        assert_eq!(corridor.len(), 7);
        assert_eq!(corridor.first(), Some(&start));
        assert!(corridor.windows(2).all(|pair| pair[0].manhattan(pair[1]) == 1));

        let end = corridor[6];
        assert_eq!(start.manhattan(end), 6);
        assert!(start.x == end.x || start.y == end.y);
    }

    #[test]
    fn zero_length_corridor_is_just_the_start() {
        let corridor = straight_corridor(Pos::new(1, 1), 0, &mut GenRng::from_seed(2));
        assert_eq!(corridor, vec![Pos::new(1, 1)]);
    }

    #[test]
    fn repeated_walks_stay_deterministic() {
        let params = RandomWalkParameters::default();
        let left = run_random_walk(&params, Pos::new(2, 2), &mut GenRng::from_seed(8));
        let right = run_random_walk(&params, Pos::new(2, 2), &mut GenRng::from_seed(8));
        assert_eq!(left, right);
        assert!(left.contains(&Pos::new(2, 2)));
    }
}
