//! Deterministic wall placement
//!
//! Whether an edge carries a wall depends only on the seed and on the
//! unordered pair of tile encodings on either side, so both tiles agree and
//! the maze is stable no matter how the viewer got there.

use super::{Chunk, Direction};
use crate::HyperError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallOracle {
    seed: u64,
}

impl WallOracle {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether the edge of `chunk` facing `direction` is a wall
    pub fn has_wall(&self, chunk: &Chunk, direction: Direction) -> Result<bool, HyperError> {
        let here = chunk.encode();
        let there = chunk.neighbor(direction)?.encode();
        Ok(mix(self.seed, here, there) & 1 == 1)
    }

    /// Wall flags in [`Direction::ALL`] order
    pub fn walls(&self, chunk: &Chunk) -> Result<[bool; 4], HyperError> {
        let mut flags = [false; 4];
        for (flag, d) in flags.iter_mut().zip(Direction::ALL) {
            *flag = self.has_wall(chunk, d)?;
        }
        Ok(flags)
    }
}

/// Symmetric 64-bit mix of a seed and two tile encodings
pub fn mix(seed: u64, a: u64, b: u64) -> u64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut h = seed ^ 0x9E37_79B9_7F4A_7C15;
    h ^= lo.rotate_left(32) ^ hi;
    h = h.wrapping_mul(0xBF58_476D_1CE4_E5B9).rotate_left(31);
    h = h.wrapping_mul(0x94D0_49BB_1331_11EB);
    h ^ (h >> 33)
}
