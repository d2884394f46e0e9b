//! The output channel — everything the simulation hands to the outside.
//!
//! RULE: The simulation core performs no rendering and no artifact I/O.
//! Snapshots and completion notices leave the core ONLY as events.

use crate::{
    error::SimResult,
    snapshot::GridSnapshot,
    types::{ScenarioName, Step},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    // ── Engine events ──────────────────────────────
    RunInitialized {
        seed:           u64,
        scenario_count: usize,
    },

    // ── Scenario events ────────────────────────────
    ScenarioStarted {
        scenario: ScenarioName,
        beta:     f64,
    },
    SnapshotCaptured(GridSnapshot),
    ScenarioCompleted {
        scenario:      ScenarioName,
        steps:         Step,
        peak_infected: usize,
    },
}

impl SimEvent {
    /// Stable string name for the variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            SimEvent::RunInitialized { .. }    => "run_initialized",
            SimEvent::ScenarioStarted { .. }   => "scenario_started",
            SimEvent::SnapshotCaptured(_)      => "snapshot_captured",
            SimEvent::ScenarioCompleted { .. } => "scenario_completed",
        }
    }
}

/// Receives events in emission order. An error aborts the run.
pub trait EventSink {
    fn emit(&mut self, event: SimEvent) -> SimResult<()>;
}

impl EventSink for Vec<SimEvent> {
    fn emit(&mut self, event: SimEvent) -> SimResult<()> {
        self.push(event);
        Ok(())
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: SimEvent) -> SimResult<()> {
        Ok(())
    }
}
