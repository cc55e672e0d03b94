//! Error types for the decode crate.

use thiserror::Error;

/// Errors produced while decoding measurement results.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// A bitstring's length differs from the number of genes.
    #[error("Bitstring '{bitstring}' has {got} bits, expected {expected} (one per gene)")]
    LengthMismatch {
        /// The offending bitstring.
        bitstring: String,
        /// Number of genes.
        expected: usize,
        /// Length of the bitstring.
        got: usize,
    },

    /// A bitstring contains something other than '0' or '1'.
    #[error("Bitstring '{bitstring}' has invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending bitstring.
        bitstring: String,
        /// The invalid character.
        character: char,
        /// Its position.
        position: usize,
    },

    /// A distribution entry is negative or not finite.
    #[error("Bitstring '{bitstring}' has invalid weight {value}")]
    InvalidWeight {
        /// The offending bitstring.
        bitstring: String,
        /// The weight.
        value: f64,
    },

    /// The result holds no shots.
    #[error("Result has zero total shots")]
    NoShots,

    /// The counts do not add up to the shots the backend reported.
    #[error("Backend reported {reported} shots but the counts add up to {counted}")]
    ShotMismatch {
        /// Shots in the execution result.
        reported: u32,
        /// Sum of the counts.
        counted: u64,
    },

    /// The distribution holds no probability mass.
    #[error("Distribution has zero total probability")]
    ZeroProbability,

    /// Every outcome was the all-off state and it was dropped.
    #[error("Nothing left to decode after dropping the all-off state")]
    NothingRemaining,
}

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
