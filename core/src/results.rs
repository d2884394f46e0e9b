//! Per-scenario count sequences, kept in declaration order.

use crate::{
    grid::StepCounts,
    types::{ScenarioName, Step},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name:   ScenarioName,
    pub beta:   f64,
    /// One tally per step; index = step.
    pub counts: Vec<StepCounts>,
}

impl ScenarioResult {
    /// `(step, infected)` at the first step where Infected peaks.
    pub fn peak_infected(&self) -> (Step, usize) {
        self.counts
            .iter()
            .enumerate()
            .fold((0, 0), |best, (step, c)| {
                if c.infected > best.1 { (step, c.infected) } else { best }
            })
    }

    pub fn final_counts(&self) -> Option<StepCounts> {
        self.counts.last().copied()
    }

    /// Fraction of cells no longer Susceptible at the last recorded step.
    pub fn attack_rate(&self) -> f64 {
        match self.final_counts() {
            Some(c) if c.total() > 0 => 1.0 - c.susceptible as f64 / c.total() as f64,
            _ => 0.0,
        }
    }

    pub fn infected_series(&self) -> Vec<usize> {
        self.counts.iter().map(|c| c.infected).collect()
    }
}

/// Built incrementally by the engine; a pushed result is never modified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimResults {
    scenarios: Vec<ScenarioResult>,
}

impl SimResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, result: ScenarioResult) {
        self.scenarios.push(result);
    }

    pub fn get(&self, name: &str) -> Option<&ScenarioResult> {
        self.scenarios.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScenarioResult> {
        self.scenarios.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.scenarios.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
