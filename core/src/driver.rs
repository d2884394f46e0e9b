//! The simulation driver — runs one scenario to completion.
//!
//! STEP ORDER (fixed, never reordered):
//!   1. Tally the grid entering the step and record it.
//!   2. If the step is a capture step, emit a snapshot of that grid.
//!   3. Apply the transition rule to obtain the next grid.
//!
//! Step 0's tally is therefore the unmodified initial grid, and the
//! grid produced by the final transition is never recorded.

use crate::{
    error::SimResult,
    event::{EventSink, SimEvent},
    grid::{Grid, StepCounts},
    rng::UniformSource,
    rule::{update_seir_ca, SeirRates},
    snapshot::GridSnapshot,
    types::{ScenarioName, Step},
};
use serde::{Deserialize, Serialize};

/// An immutable, fully resolved scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name:           ScenarioName,
    pub rates:          SeirRates,
    /// Steps at which the grid is captured. Empty disables capture.
    pub snapshot_steps: Vec<Step>,
}

impl Scenario {
    pub fn new(name: impl Into<ScenarioName>, rates: SeirRates) -> Self {
        Self {
            name: name.into(),
            rates,
            snapshot_steps: Vec::new(),
        }
    }

    pub fn with_snapshots(mut self, steps: Vec<Step>) -> Self {
        self.snapshot_steps = steps;
        self
    }

    pub fn captures(&self, step: Step) -> bool {
        self.snapshot_steps.contains(&step)
    }
}

/// Run `steps` iterations from `initial_grid`.
/// Returns exactly `steps` tallies, one per step.
pub fn simulate_seir_ca_with_snapshots<R, S>(
    initial_grid: &Grid,
    scenario: &Scenario,
    steps: Step,
    rng: &mut R,
    sink: &mut S,
) -> SimResult<Vec<StepCounts>>
where
    R: UniformSource + ?Sized,
    S: EventSink + ?Sized,
{
    let mut grid = initial_grid.clone();
    let mut counts = Vec::with_capacity(steps);

    for step in 0..steps {
        let tally = StepCounts::tally(&grid);
        debug_assert_eq!(tally.total(), grid.cell_count(), "cells lost at step {step}");
        counts.push(tally);

        log::trace!(
            "step={step} {}: S={} E={} I={} R={}",
            scenario.name, tally.susceptible, tally.exposed, tally.infected, tally.recovered
        );

        if scenario.captures(step) {
            log::debug!("step={step} {}: snapshot captured", scenario.name);
            sink.emit(SimEvent::SnapshotCaptured(GridSnapshot {
                scenario: scenario.name.clone(),
                step,
                grid: grid.clone(),
            }))?;
        }

        grid = update_seir_ca(&grid, &scenario.rates, rng);
    }

    Ok(counts)
}
