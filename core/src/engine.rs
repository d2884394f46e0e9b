//! The scenario orchestrator — the top of the simulation.
//!
//! EXECUTION ORDER (fixed, never reordered):
//!   Scenarios run in declaration order, each to completion
//!   before the next begins.
//!
//! RULES:
//!   - Every scenario starts from a fresh seeded grid.
//!   - Every scenario draws from its own stream in the RngBank,
//!     derived from the master seed and its declaration index.
//!   - Nothing leaves the engine except events and SimResults.

use crate::{
    config::SimConfig,
    driver::simulate_seir_ca_with_snapshots,
    error::SimResult,
    event::{EventSink, SimEvent},
    grid::initialize_grid,
    results::{ScenarioResult, SimResults},
    rng::RngBank,
};

pub struct SimEngine {
    pub config:   SimConfig,
    pub rng_bank: RngBank,
}

impl SimEngine {
    /// Validates the configuration; an invalid one never runs.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            rng_bank: RngBank::new(config.master_seed),
            config,
        })
    }

    /// Run every scenario and collect its counts.
    pub fn run<S: EventSink + ?Sized>(&self, sink: &mut S) -> SimResult<SimResults> {
        let scenarios = self.config.scenarios();
        sink.emit(SimEvent::RunInitialized {
            seed:           self.rng_bank.master_seed(),
            scenario_count: scenarios.len(),
        })?;

        let mut results = SimResults::new();
        for (index, scenario) in scenarios.iter().enumerate() {
            log::info!("simulating {} | beta = {}", scenario.name, scenario.rates.beta);
            sink.emit(SimEvent::ScenarioStarted {
                scenario: scenario.name.clone(),
                beta:     scenario.rates.beta,
            })?;

            let mut rng = self.rng_bank.for_scenario(index, &scenario.name);
            log::debug!("stream '{}' derived at index {index}", rng.name);
            let initial = initialize_grid(self.config.grid_size);
            let counts = simulate_seir_ca_with_snapshots(
                &initial,
                scenario,
                self.config.steps,
                &mut rng,
                &mut *sink,
            )?;

            let result = ScenarioResult {
                name:   scenario.name.clone(),
                beta:   scenario.rates.beta,
                counts,
            };
            let (peak_step, peak_infected) = result.peak_infected();
            log::debug!(
                "{} complete: peak I={peak_infected} at step {peak_step}, attack rate {:.3}",
                result.name,
                result.attack_rate()
            );
            sink.emit(SimEvent::ScenarioCompleted {
                scenario: result.name.clone(),
                steps:    result.counts.len(),
                peak_infected,
            })?;
            results.push(result);
        }

        Ok(results)
    }
}
