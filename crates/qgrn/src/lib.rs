//! # qgrn
//!
//! Quantum-circuit simulation of gene regulatory networks.
//!
//! A [`RegulatoryGraph`] of genes and signed regulatory edges is encoded as a
//! circuit with one qubit per gene, executed on a [`Backend`], and the
//! measurement counts are decoded into an [`ExpressionProfile`] of per-gene
//! "on" probabilities.
//!
//! ```text
//!   RegulatoryGraph ──encode──→ EncodedCircuit ──run──→ ExecutionResult
//!          │                          │                        │
//!          └── GeneOrdering ──────────┴───────decode───────────┴──→ ExpressionProfile
//! ```
//!
//! ## Crates
//!
//! - [`qgrn_network`]: genes, edges, validated graphs
//! - [`qgrn_encode`]: graph → circuit
//! - [`qgrn_hal`]: backend trait, run configuration, noise, results
//! - [`qgrn_adapter_sim`]: local statevector / trajectory simulator
//! - [`qgrn_decode`]: counts → expression profile
//!
//! ## Example
//!
//! ```rust
//! use qgrn::{Pipeline, RegulatoryGraph, SimulationConfig};
//!
//! let graph = RegulatoryGraph::builder()
//!     .gene("A", 1.0)
//!     .gene("B", 0.0)
//!     .activates("A", "B")
//!     .build()
//!     .unwrap();
//!
//! let pipeline = Pipeline::simulator(SimulationConfig::default().with_seed(7)).unwrap();
//! let profile = pipeline.simulate(&graph).unwrap();
//! assert_eq!(profile.probability("A"), Some(1.0));
//! assert!(profile.probability("B").unwrap() > 0.5);
//! ```
//!
//! [`Backend`]: qgrn_hal::Backend

pub mod config;
pub mod error;
pub mod network;
pub mod pipeline;

pub use config::{DEFAULT_BACKEND, SimulationConfig};
pub use error::{GrnError, GrnResult};
pub use network::NetworkDescription;
pub use pipeline::{Pipeline, SimulationRun, simulate};

pub use qgrn_adapter_sim::SimulatorBackend;
pub use qgrn_decode::{DecodeOptions, ExpressionProfile};
pub use qgrn_encode::{AngleMapping, EdgeEncoding, EdgeOrder, EncodingConfig};
pub use qgrn_hal::{Backend, NoiseProfile, RunConfig};
pub use qgrn_network::{Gene, GeneOrdering, RegulatoryEdge, RegulatoryGraph, Sign};

pub use qgrn_adapter_sim;
pub use qgrn_decode;
pub use qgrn_encode;
pub use qgrn_hal;
pub use qgrn_ir;
pub use qgrn_network;
