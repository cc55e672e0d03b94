//! qgrn Local Simulator
//!
//! This crate provides the simulator that executes encoded regulatory
//! network circuits:
//!
//! - **Statevector**: exact amplitudes for unitary circuits, sampled per shot
//! - **Trajectories**: one stochastic Kraus-branch realisation per shot for
//!   circuits containing transfer channels, decay, or gate noise
//! - **Density matrix**: the exact outcome distribution, without shot noise,
//!   for circuits of up to [`MAX_DENSITY_QUBITS`] qubits
//! - **Seeded**: every run is reproducible from the seed recorded in its
//!   result
//!
//! # Performance
//!
//! | Qubits | Statevector | Density matrix |
//! |--------|-------------|----------------|
//! | 5 | ~512 B | ~16 KB |
//! | 10 | ~16 KB | ~16 MB |
//! | 20 | ~16 MB | not supported |
//!
//! # Example
//!
//! ```rust
//! use qgrn_adapter_sim::SimulatorBackend;
//! use qgrn_hal::{Backend, RunConfig};
//! use qgrn_ir::{Circuit, QubitId};
//!
//! let backend = SimulatorBackend::new();
//!
//! let mut circuit = Circuit::with_size("bell", 2, 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! let result = backend.run(&circuit, &RunConfig::new(1000).with_seed(7)).unwrap();
//! assert_eq!(result.counts.get("00") + result.counts.get("11"), 1000);
//!
//! let exact = backend.probabilities(&circuit, None).unwrap();
//! assert!((exact.get("11") - 0.5).abs() < 1e-12);
//! ```

mod density;
mod plan;
mod simulator;
mod statevector;

pub use simulator::{DEFAULT_MAX_QUBITS, MAX_DENSITY_QUBITS, SimulatorBackend};
