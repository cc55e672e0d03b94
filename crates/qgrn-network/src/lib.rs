//! Gene regulatory network model for qgrn.
//!
//! A [`RegulatoryGraph`] is a validated set of genes and directed, signed,
//! weighted regulatory edges. Construction checks every invariant up front,
//! so downstream code (the circuit encoder in particular) never sees a
//! dangling edge, a duplicated gene, or an initial probability outside
//! `[0, 1]`.
//!
//! The graph also fixes the [`GeneOrdering`]: gene `i` is qubit `i` of the
//! encoded circuit and character `i` of every measured bitstring.
//!
//! # Example
//!
//! ```rust
//! use qgrn_network::RegulatoryGraph;
//!
//! let graph = RegulatoryGraph::builder()
//!     .gene("lacI", 1.0)
//!     .gene("tetR", 0.0)
//!     .gene("cI", 0.0)
//!     .represses("lacI", "tetR")
//!     .represses("tetR", "cI")
//!     .represses("cI", "lacI")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(graph.num_genes(), 3);
//! assert!(graph.has_cycle());
//! assert_eq!(graph.ordering().position("cI"), Some(2));
//! ```

pub mod error;
pub mod gene;
pub mod graph;
pub mod observations;
pub mod ordering;

pub use error::{NetworkError, NetworkResult};
pub use gene::{DEFAULT_WEIGHT, Gene, RegulatoryEdge, Sign};
pub use graph::{GraphBuilder, RegulatoryGraph};
pub use observations::activation_ratios;
pub use ordering::GeneOrdering;
