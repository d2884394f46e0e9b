//! Shared primitive types used across the entire simulation.

/// A simulation step index. Step 0 is the seeded initial grid.
pub type Step = usize;

/// The stable, declared name of a scenario.
pub type ScenarioName = String;
