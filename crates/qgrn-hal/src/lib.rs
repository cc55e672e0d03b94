//! qgrn Backend Abstraction Layer
//!
//! This crate defines how an encoded circuit is handed to something that
//! executes it:
//! - the [`Backend`] trait (synchronous run plus optional exact distribution)
//! - [`Capabilities`] describing qubit and shot limits
//! - [`RunConfig`] and [`NoiseProfile`] for per-run settings
//! - [`Counts`], [`Distribution`] and [`ExecutionResult`] for results
//!
//! # Implementing a Custom Backend
//!
//! ```rust
//! use qgrn_hal::{Backend, Capabilities, Counts, ExecutionResult, HalResult, RunConfig};
//! use qgrn_ir::Circuit;
//!
//! /// Always reports every gene off.
//! struct AllOff {
//!     caps: Capabilities,
//! }
//!
//! impl Backend for AllOff {
//!     fn name(&self) -> &str {
//!         "all-off"
//!     }
//!
//!     fn capabilities(&self) -> &Capabilities {
//!         &self.caps
//!     }
//!
//!     fn validate(&self, _circuit: &Circuit, _config: &RunConfig) -> HalResult<()> {
//!         Ok(())
//!     }
//!
//!     fn run(&self, circuit: &Circuit, config: &RunConfig) -> HalResult<ExecutionResult> {
//!         let mut counts = Counts::new();
//!         counts.insert("0".repeat(circuit.num_clbits()), u64::from(config.shots));
//!         Ok(ExecutionResult::new(counts, config.shots))
//!     }
//! }
//!
//! let backend = AllOff { caps: Capabilities::simulator(4) };
//! let result = backend
//!     .run(&Circuit::with_size("c", 2, 2), &RunConfig::new(10))
//!     .unwrap();
//! assert_eq!(result.counts.get("00"), 10);
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod noise;
pub mod result;

pub use backend::{Backend, BackendConfig, BackendFactory, DEFAULT_SHOTS, RunConfig};
pub use capability::{Capabilities, DEFAULT_MAX_SHOTS};
pub use error::{HalError, HalResult};
pub use noise::NoiseProfile;
pub use result::{Counts, Distribution, ExecutionResult};
