//! Spawner module - random piece selection
//!
//! Each draw picks one of the seven kinds uniformly at random, independent of
//! prior draws (no bag or shuffle guarantee).
//!
//! Uses a simple LCG so games are reproducible from a seed.

use crate::types::PieceKind;

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
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Use the high bits; LCG low bits have short periods.
        (self.next_u32() >> 16) % max
    }
}

/// Draws the next piece kind, uniformly over the catalog.
#[derive(Debug, Clone)]
pub struct PieceSpawner {
    rng: SimpleRng,
}

impl PieceSpawner {
    /// Create a new spawner with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind.
    pub fn next(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32);
        PieceKind::ALL[idx as usize]
    }
}
