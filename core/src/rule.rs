//! The CA-SEIR transition rule.
//!
//! RULES:
//!   - Every decision for step t reads ONLY the grid entering step t.
//!   - The input grid is never mutated; a fresh grid is returned.
//!   - Cells are visited row-major. Each non-Recovered cell consumes
//!     exactly one draw; Recovered cells consume none.

use crate::{
    error::{SimError, SimResult},
    grid::{count_infected_neighbors, CellState, Grid},
    rng::UniformSource,
};
use serde::{Deserialize, Serialize};

/// Per-step transition probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeirRates {
    /// Per infected neighbour, per step: S -> E.
    pub beta: f64,
    /// E -> I.
    pub sigma: f64,
    /// I -> R.
    pub gamma: f64,
}

impl SeirRates {
    pub fn new(beta: f64, sigma: f64, gamma: f64) -> Self {
        Self { beta, sigma, gamma }
    }

    pub fn validate(&self) -> SimResult<()> {
        for (name, value) in [("beta", self.beta), ("sigma", self.sigma), ("gamma", self.gamma)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SimError::InvalidRate { name, value });
            }
        }
        Ok(())
    }
}

/// `1 - (1 - beta)^n`: the chance at least one of `n` infected
/// neighbours transmits. Exactly zero when `n == 0`.
pub fn infection_probability(beta: f64, n_infected: u8) -> f64 {
    if n_infected == 0 {
        return 0.0;
    }
    1.0 - (1.0 - beta).powi(i32::from(n_infected))
}

/// Next label for one cell.
pub fn next_state<R: UniformSource + ?Sized>(
    state: CellState,
    n_infected: u8,
    rates: &SeirRates,
    rng: &mut R,
) -> CellState {
    match state {
        CellState::Susceptible => {
            if rng.chance(infection_probability(rates.beta, n_infected)) {
                CellState::Exposed
            } else {
                CellState::Susceptible
            }
        }
        CellState::Exposed => {
            if rng.chance(rates.sigma) {
                CellState::Infected
            } else {
                CellState::Exposed
            }
        }
        CellState::Infected => {
            if rng.chance(rates.gamma) {
                CellState::Recovered
            } else {
                CellState::Infected
            }
        }
        CellState::Recovered => CellState::Recovered,
    }
}

/// Advance the whole grid by one step.
pub fn update_seir_ca<R: UniformSource + ?Sized>(
    grid: &Grid,
    rates: &SeirRates,
    rng: &mut R,
) -> Grid {
    let mut next = grid.clone();
    for (x, y, state) in grid.iter() {
        let n_infected = match state {
            CellState::Susceptible => count_infected_neighbors(grid, x, y),
            _ => 0,
        };
        next.set(x, y, next_state(state, n_infected, rates, rng));
    }
    next
}
