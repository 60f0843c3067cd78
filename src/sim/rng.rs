//! Injectable randomness for spawning and commentary
//!
//! The simulation never reaches for a global RNG; callers hand it a
//! [`SpawnSource`]. Runs use a seeded PCG so a seed replays exactly.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Uniform draws used by the simulation
pub trait SpawnSource {
    /// Uniform in `[0, 1)`
    fn unit(&mut self) -> f32;

    /// Uniform in `0..n`; 0 when `n == 0`
    fn index(&mut self, n: usize) -> usize;

    /// Uniform in `[lo, hi)`; `lo` for an empty range
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        lo + self.unit() * (hi - lo)
    }
}

impl SpawnSource for Pcg32 {
    fn unit(&mut self) -> f32 {
        self.random::<f32>()
    }

    fn index(&mut self, n: usize) -> usize {
        if n == 0 { 0 } else { self.random_range(0..n) }
    }
}

/// RNG seed wrapper for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Replays a fixed list of unit draws (wrapping), for tests
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct Scripted {
    values: Vec<f32>,
    next: usize,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn new(values: &[f32]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

#[cfg(test)]
impl SpawnSource for Scripted {
    fn unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }

    fn index(&mut self, n: usize) -> usize {
        ((self.unit() * n as f32) as usize).min(n.saturating_sub(1))
    }
}
