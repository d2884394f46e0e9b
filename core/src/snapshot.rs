//! Grid snapshots handed to the rendering side.
//!
//! Only scenarios flagged `capture_snapshots` produce them, at
//! steps {0, steps/3, 2*steps/3, steps-1}.

use crate::{
    grid::Grid,
    types::{ScenarioName, Step},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub scenario: ScenarioName,
    pub step:     Step,
    pub grid:     Grid,
}

/// Sorted, deduplicated capture steps for a run of `steps` steps.
/// Empty when `steps == 0`.
pub fn snapshot_steps(steps: Step) -> Vec<Step> {
    if steps == 0 {
        return Vec::new();
    }
    let mut out = vec![0, steps / 3, 2 * steps / 3, steps - 1];
    out.sort_unstable();
    out.dedup();
    out
}
