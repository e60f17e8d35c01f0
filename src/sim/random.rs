//! Injectable randomness
//!
//! The impulse generator and particle layout draw through [`RandomSource`] so
//! tests can script exact values while the game runs on a seeded PCG.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform random draws used by the simulation
pub trait RandomSource {
    /// Uniform value in [0, 1)
    fn unit(&mut self) -> f32;

    /// Uniform value in [min, max)
    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.unit() * (max - min)
    }

    /// -1.0 or 1.0 with equal odds
    fn sign(&mut self) -> f32 {
        if self.unit() < 0.5 { -1.0 } else { 1.0 }
    }
}

impl RandomSource for Pcg32 {
    fn unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Seeded generator used by [`crate::sim::SimState`]
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of unit draws, then repeats the last one
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<f32>,
    last: f32,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            last: 0.0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f32 {
        if let Some(v) = self.values.pop_front() {
            self.last = v.clamp(0.0, 1.0);
        }
        self.last
    }
}
