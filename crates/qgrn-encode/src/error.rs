//! Error types for the encode crate.

use thiserror::Error;

/// Errors produced while encoding a network as a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EncodeError {
    /// The network has no genes.
    #[error("Network has no genes to encode")]
    EmptyNetwork,

    /// A configuration value is out of range.
    #[error("Invalid encoding config: {field} = {value} ({reason})")]
    InvalidConfig {
        /// The offending field.
        field: &'static str,
        /// The offending value, formatted.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// An edge's rotation angle exceeds the maximum and clipping is off.
    #[error("Edge {source_gene} -> {target_gene} maps to angle {angle} > {max}")]
    AngleOutOfRange {
        /// Source gene of the edge.
        source_gene: String,
        /// Target gene of the edge.
        target_gene: String,
        /// The unclipped angle.
        angle: f64,
        /// The largest allowed angle.
        max: f64,
    },

    /// A repressing edge under [`EdgeEncoding::Rotation`](crate::EdgeEncoding::Rotation).
    ///
    /// A controlled rotation cannot lower a target that starts off, so
    /// repression needs the transfer encoding.
    #[error(
        "Edge {source_gene} -> {target_gene} is repressing; rotation encoding only supports activation"
    )]
    RepressionUnsupported {
        /// Source gene of the edge.
        source_gene: String,
        /// Target gene of the edge.
        target_gene: String,
    },

    /// More genes than qubits available.
    #[error("Network has {genes} genes but {limit_source} allows only {limit} qubits")]
    QubitBudgetExceeded {
        /// Number of genes (and qubits needed).
        genes: usize,
        /// Qubits available.
        limit: u32,
        /// Where the limit came from.
        limit_source: String,
    },

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] qgrn_ir::IrError),
}

/// Result type for encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;
