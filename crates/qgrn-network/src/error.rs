//! Error types for the network crate.

use thiserror::Error;

/// Errors raised while building or querying a regulatory graph.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum NetworkError {
    /// A gene was given an empty name.
    #[error("Gene at position {position} has an empty name")]
    EmptyGeneName {
        /// Insertion position of the gene.
        position: usize,
    },

    /// Two genes share a name.
    #[error("Duplicate gene '{name}'")]
    DuplicateGene {
        /// The repeated name.
        name: String,
    },

    /// An initial expression probability is outside `[0, 1]` or not finite.
    #[error("Gene '{gene}' has invalid initial probability {value}")]
    InvalidInitialProbability {
        /// The gene.
        gene: String,
        /// The rejected value.
        value: f64,
    },

    /// A name does not belong to any gene of the graph.
    #[error("Unknown gene '{gene}'")]
    UnknownGene {
        /// The name that was looked up.
        gene: String,
    },

    /// An edge endpoint does not name a gene of the graph.
    #[error("Edge {source_gene} -> {target_gene} references unknown gene '{missing}'")]
    UnknownEdgeEndpoint {
        /// Source gene of the edge.
        source_gene: String,
        /// Target gene of the edge.
        target_gene: String,
        /// The endpoint that was not found.
        missing: String,
    },

    /// An edge weight is negative or not finite.
    #[error("Edge {source_gene} -> {target_gene} has invalid weight {value}")]
    InvalidWeight {
        /// Source gene of the edge.
        source_gene: String,
        /// Target gene of the edge.
        target_gene: String,
        /// The rejected weight.
        value: f64,
    },

    /// A self-loop was given while autoregulation is disabled.
    #[error("Self-loop on gene '{gene}' requires autoregulation to be enabled")]
    SelfLoop {
        /// The gene regulating itself.
        gene: String,
    },

    /// A second edge between the same ordered pair of genes.
    #[error("Duplicate edge {source_gene} -> {target_gene}")]
    DuplicateEdge {
        /// Source gene of the edge.
        source_gene: String,
        /// Target gene of the edge.
        target_gene: String,
    },

    /// An observation row does not have one entry per gene.
    #[error("Observation row {row} has {got} entries, expected {expected}")]
    ObservationShape {
        /// Row index.
        row: usize,
        /// Number of genes.
        expected: usize,
        /// Entries found in the row.
        got: usize,
    },

    /// An observation entry is NaN or infinite.
    #[error("Observation row {row}, column {column} is not finite: {value}")]
    InvalidObservation {
        /// Row index.
        row: usize,
        /// Column (gene) index.
        column: usize,
        /// The rejected entry.
        value: f64,
    },

    /// An observation matrix has no rows.
    #[error("Observation matrix has no rows")]
    EmptyObservations,
}

/// Result type for network operations.
pub type NetworkResult<T> = Result<T, NetworkError>;
