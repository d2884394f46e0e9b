//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! All randomness flows through a `UniformSource` handed to the
//! transition rule explicitly.
//!
//! Each scenario gets its own stream, seeded from
//! (master_seed XOR scenario_index * golden-ratio constant). This means:
//!   - Every scenario is reproducible in isolation from the master seed.
//!   - Reordering draws inside one scenario never affects another.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A source of uniform draws in `[0.0, 1.0)`.
pub trait UniformSource {
    fn next_f64(&mut self) -> f64;

    /// Bernoulli trial: returns true with probability p.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// A named, deterministic RNG for a single scenario run.
pub struct ScenarioRng {
    pub name: String,
    inner: Pcg64Mcg,
}

impl ScenarioRng {
    /// The index must be the scenario's stable declaration position.
    pub fn new(master_seed: u64, scenario_index: u64) -> Self {
        let derived_seed = master_seed ^ scenario_index.wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self {
            name: "unnamed".to_string(),
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }
}

impl UniformSource for ScenarioRng {
    fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// Hands out one stream per scenario for a single run.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_scenario(&self, index: usize, name: &str) -> ScenarioRng {
        ScenarioRng::new(self.master_seed, index as u64).with_name(name)
    }
}

/// Always returns the same draw. `FixedDraw(0.0)` forces every
/// transition with p > 0; `FixedDraw(1.0)` forces none.
#[derive(Debug, Clone, Copy)]
pub struct FixedDraw(pub f64);

impl UniformSource for FixedDraw {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

/// Replays a fixed sequence of draws, then repeats the last one.
/// Counts how many draws were taken.
#[derive(Debug, Clone)]
pub struct ScriptedDraws {
    draws: Vec<f64>,
    pub taken: usize,
}

impl ScriptedDraws {
    pub fn new(draws: Vec<f64>) -> Self {
        assert!(!draws.is_empty(), "scripted draws must not be empty");
        Self { draws, taken: 0 }
    }
}

impl UniformSource for ScriptedDraws {
    fn next_f64(&mut self) -> f64 {
        let i = self.taken.min(self.draws.len() - 1);
        self.taken += 1;
        self.draws[i]
    }
}
