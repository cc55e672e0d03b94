//! Gene regulatory network → quantum circuit encoder.
//!
//! Each gene becomes one qubit whose |1⟩ population is the gene's
//! expression probability:
//!
//! 1. **Preparation**: `Ry(2·asin(√p))` puts gene `i` in the "on" state with
//!    its initial probability `p` (no gate for `p = 0`, `X` for `p = 1`).
//! 2. **Regulation**: every edge becomes one operation on
//!    `(source, target)`, applied in a fixed order so cyclic networks have a
//!    well-defined circuit. The layer repeats `steps` times.
//! 3. **Measurement**: qubit `i` into classical bit `i`.
//!
//! The default [`EdgeEncoding::Transfer`] model moves target population
//! toward |1⟩ (activation) or |0⟩ (repression) with probability
//! `sin²(θ/2)` in the branch where the source is on. Because repression can
//! only ever remove "on" population, turning an edge from activating to
//! repressing never raises the target's expression.
//!
//! # Example
//!
//! ```rust
//! use qgrn_encode::{CircuitEncoder, EncodingConfig};
//! use qgrn_network::RegulatoryGraph;
//!
//! let graph = RegulatoryGraph::builder()
//!     .gene("A", 1.0)
//!     .gene("B", 0.0)
//!     .activates("A", "B")
//!     .build()
//!     .unwrap();
//!
//! let encoded = CircuitEncoder::new(EncodingConfig::default())
//!     .encode(&graph)
//!     .unwrap();
//!
//! assert_eq!(encoded.num_qubits(), 2);
//! assert_eq!(encoded.ordering.names(), ["A", "B"]);
//! ```

pub mod config;
pub mod encoder;
pub mod error;

pub use config::{AngleMapping, EdgeEncoding, EdgeOrder, EncodingConfig, MAX_ANGLE};
pub use encoder::{CircuitEncoder, EncodedCircuit, preparation_angle};
pub use error::{EncodeError, EncodeResult};
