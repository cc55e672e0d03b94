//! Measurement results → gene expression profiles.
//!
//! Character `i` of every bitstring is gene `i` of the [`GeneOrdering`] the
//! circuit was encoded with. A gene's marginal is the share of the total
//! weight on bitstrings with a `'1'` in its position.
//!
//! # Example
//!
//! ```rust
//! use qgrn_decode::decode;
//! use qgrn_hal::{Counts, ExecutionResult};
//! use qgrn_network::GeneOrdering;
//!
//! let ordering = GeneOrdering::new(["lacI", "gfp"]).unwrap();
//! let counts: Counts = [("10", 750u64), ("11", 250)].into_iter().collect();
//! let result = ExecutionResult::new(counts, 1000);
//!
//! let profile = decode(&result, &ordering).unwrap();
//! assert_eq!(profile.probability("lacI"), Some(1.0));
//! assert_eq!(profile.probability("gfp"), Some(0.25));
//! assert_eq!(profile.most_probable_state(), "10");
//! ```
//!
//! [`GeneOrdering`]: qgrn_network::GeneOrdering

pub mod decoder;
pub mod error;
pub mod profile;

pub use decoder::{
    DecodeOptions, decode, decode_counts, decode_distribution, decode_distribution_with,
    decode_with,
};
pub use error::{DecodeError, DecodeResult};
pub use profile::ExpressionProfile;
