use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Rate '{name}' must lie in [0, 1], got {value}")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("Grid size must be positive and at most {} cells", i32::MAX)]
    InvalidGridSize,

    #[error("Step count must be positive")]
    InvalidSteps,

    #[error("No scenarios configured")]
    NoScenarios,

    #[error("Scenario '{name}' declared more than once")]
    DuplicateScenario { name: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
