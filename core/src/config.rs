use crate::{
    driver::Scenario,
    error::{SimError, SimResult},
    rule::SeirRates,
    snapshot::snapshot_steps,
    types::{ScenarioName, Step},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub const DEFAULT_SIGMA: f64 = 0.5;
pub const DEFAULT_GAMMA: f64 = 0.14;
pub const DEFAULT_GRID_SIZE: usize = 100;
pub const DEFAULT_STEPS: Step = 250;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_OUTPUT_DIR: &str = "resultados";

/// Largest accepted cell count; renderers address cells as i32.
pub const MAX_CELLS: usize = i32::MAX as usize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub name: ScenarioName,
    /// Transmission rate (β).
    pub beta: f64,
    #[serde(default)]
    pub capture_snapshots: bool,
}

impl ScenarioConfig {
    pub fn new(name: &str, beta: f64) -> Self {
        Self {
            name: name.to_string(),
            beta,
            capture_snapshots: false,
        }
    }

    pub fn with_snapshots(mut self) -> Self {
        self.capture_snapshots = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub grid_size:   usize,
    pub steps:       Step,
    /// Incubation rate (σ), shared by every scenario.
    pub sigma:       f64,
    /// Recovery rate (γ), shared by every scenario.
    pub gamma:       f64,
    pub master_seed: u64,
    pub output_dir:  String,
    /// Run in declaration order.
    pub scenarios:   Vec<ScenarioConfig>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_size:   DEFAULT_GRID_SIZE,
            steps:       DEFAULT_STEPS,
            sigma:       DEFAULT_SIGMA,
            gamma:       DEFAULT_GAMMA,
            master_seed: DEFAULT_SEED,
            output_dir:  DEFAULT_OUTPUT_DIR.to_string(),
            scenarios: vec![
                ScenarioConfig::new("Cenario_1_Beta_010", 0.10).with_snapshots(),
                ScenarioConfig::new("Cenario_2_Beta_018", 0.18),
                ScenarioConfig::new("Cenario_3_Beta_035", 0.35),
            ],
        }
    }
}

impl SimConfig {
    /// Load from a JSON file. Missing fields fall back to the defaults.
    /// In tests, use SimConfig::default_test().
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: SimConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Small, fast configuration for tests: 21×21 grid, 30 steps.
    pub fn default_test() -> Self {
        Self {
            grid_size: 21,
            steps: 30,
            output_dir: "test-output".to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        let cells = self.grid_size.checked_mul(self.grid_size);
        if self.grid_size == 0 || cells.map_or(true, |c| c > MAX_CELLS) {
            return Err(SimError::InvalidGridSize);
        }
        if self.steps == 0 {
            return Err(SimError::InvalidSteps);
        }
        if self.scenarios.is_empty() {
            return Err(SimError::NoScenarios);
        }
        let mut seen = HashSet::new();
        for s in &self.scenarios {
            if !seen.insert(s.name.as_str()) {
                return Err(SimError::DuplicateScenario { name: s.name.clone() });
            }
            self.rates_for(s).validate()?;
        }
        Ok(())
    }

    /// Resolve every scenario with the shared σ/γ and its capture steps.
    pub fn scenarios(&self) -> Vec<Scenario> {
        self.scenarios
            .iter()
            .map(|s| {
                let scenario = Scenario::new(s.name.clone(), self.rates_for(s));
                if s.capture_snapshots {
                    scenario.with_snapshots(snapshot_steps(self.steps))
                } else {
                    scenario
                }
            })
            .collect()
    }

    fn rates_for(&self, s: &ScenarioConfig) -> SeirRates {
        SeirRates::new(s.beta, self.sigma, self.gamma)
    }
}
