//! Deterministic random stream used by every generation stage.
//!
//! All draws for one dungeon come from a single ChaCha8 stream in a fixed order,
//! so the same seed and parameters always yield the same level.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::types::{Direction4, Pos};

#[derive(Clone, Debug)]
pub struct GenRng {
    inner: ChaCha8Rng,
}

impl GenRng {
    pub fn from_seed(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Uniform value in `[min, max_exclusive)`. Returns `min` for empty ranges.
    pub fn range_i32(&mut self, min: i32, max_exclusive: i32) -> i32 {
        if max_exclusive <= min {
            return min;
        }
        let span = (i64::from(max_exclusive) - i64::from(min)) as u64;
        (i64::from(min) + (self.next_u64() % span) as i64) as i32
    }

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.next_u64() % len as u64) as usize
    }

    /// Uniform float in `[0, 1)` built from the top 53 bits of one draw.
    pub fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }

    pub fn coin(&mut self) -> bool {
        self.next_u64() & 1 == 0
    }

    pub fn cardinal(&mut self) -> Direction4 {
        Direction4::ALL[self.index(Direction4::ALL.len())]
    }

    pub fn cardinal_step(&mut self, from: Pos) -> Pos {
        let direction = self.cardinal();
        from.step(direction)
    }

    /// Fisher-Yates shuffle walking from the back of the slice.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }
}
