//! RNG module - deterministic food placement
//!
//! Food is dropped on a uniformly random grid cell. The generator is a small
//! LCG so a seed fully determines every food position of a session, which keeps
//! tests and benchmarks reproducible.
//!
//! Placement deliberately ignores what already occupies the cell: food may land
//! on the snake, on an obstacle, or where the previous food was.

use crate::types::{Point, GRID_COLS, GRID_ROWS};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Top-left corner of a uniformly chosen grid cell.
    pub fn next_cell(&mut self) -> Point {
        let col = self.next_range(GRID_COLS as u32) as i32;
        let row = self.next_range(GRID_ROWS as u32) as i32;
        Point::from_cell(col, row)
    }
}
