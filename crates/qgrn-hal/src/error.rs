//! Error types for the HAL crate.

use thiserror::Error;

/// Errors that can occur in HAL operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// Invalid circuit.
    #[error("Invalid circuit: {0}")]
    InvalidCircuit(String),

    /// Circuit exceeds backend capabilities.
    #[error("Circuit exceeds backend capabilities: {0}")]
    CircuitTooLarge(String),

    /// Invalid number of shots.
    #[error("Invalid shots: {0}")]
    InvalidShots(String),

    /// A noise parameter is not a probability.
    #[error("Invalid noise: {0}")]
    InvalidNoise(String),

    /// Unsupported feature.
    #[error("Unsupported feature: {0}")]
    Unsupported(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Simulation ran but produced an unusable state.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

impl HalError {
    /// Whether the error happened while executing an accepted circuit, as
    /// opposed to the circuit or run configuration being rejected up front.
    pub fn is_execution_failure(&self) -> bool {
        matches!(self, HalError::ExecutionFailed(_))
    }
}

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;
