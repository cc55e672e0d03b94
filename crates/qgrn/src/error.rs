//! Unified error taxonomy for the pipeline.

use qgrn_decode::DecodeError;
use qgrn_encode::EncodeError;
use qgrn_hal::HalError;
use qgrn_network::NetworkError;
use thiserror::Error;

/// Every way a simulation can fail, by stage.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GrnError {
    /// The network description is malformed.
    #[error("Validation error: {0}")]
    Validation(#[from] NetworkError),

    /// The network cannot be expressed as a circuit.
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodeError),

    /// The backend rejected the circuit or run configuration.
    #[error("Backend error: {0}")]
    Backend(HalError),

    /// The backend accepted the circuit but the simulation failed.
    #[error("Execution error: {0}")]
    Execution(HalError),

    /// The measurement result cannot be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Configuration text does not parse.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<HalError> for GrnError {
    fn from(err: HalError) -> Self {
        if err.is_execution_failure() {
            GrnError::Execution(err)
        } else {
            GrnError::Backend(err)
        }
    }
}

impl GrnError {
    /// Pipeline stage the error came from.
    pub fn stage(&self) -> &'static str {
        match self {
            GrnError::Validation(_) => "validation",
            GrnError::Encoding(_) => "encoding",
            GrnError::Backend(_) => "backend",
            GrnError::Execution(_) => "execution",
            GrnError::Decode(_) => "decode",
            GrnError::Config(_) => "config",
        }
    }
}

/// Result type for pipeline operations.
pub type GrnResult<T> = Result<T, GrnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hal_routing() {
        let err: GrnError = HalError::ExecutionFailed("norm drifted".into()).into();
        assert!(matches!(err, GrnError::Execution(_)));
        assert_eq!(err.stage(), "execution");

        let err: GrnError = HalError::InvalidShots("0".into()).into();
        assert!(matches!(err, GrnError::Backend(_)));
        assert!(err.to_string().starts_with("Backend error"));
    }

    #[test]
    fn test_validation_message_names_gene() {
        let err: GrnError = NetworkError::UnknownGene { gene: "tetR".into() }.into();
        assert_eq!(err.stage(), "validation");
        assert!(err.to_string().contains("tetR"));
    }
}
