//! qgrn Circuit Intermediate Representation
//!
//! This crate provides the circuit data structures that the regulatory
//! network encoder produces and the simulator consumes.
//!
//! # Overview
//!
//! A [`Circuit`] is an ordered list of [`Instruction`]s over a fixed set of
//! qubits and classical bits. Order is significant: the simulator applies
//! instructions exactly in insertion order, which is how the encoder pins the
//! edge-application order of cyclic networks.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`], optionally
//!   labelled with the gene they carry
//! - **Gates**: [`StandardGate`] for the unitary gates the encoder and tests use
//! - **Channels**: [`ControlledTransfer`] and [`Decay`], the non-unitary
//!   population-transfer operations used for regulatory edges
//! - **Noise**: [`NoiseModel`] for the physical noise channels a backend may
//!   inject
//! - **Circuit**: [`Circuit`] builder API
//!
//! # Example: A two-gene activation circuit
//!
//! ```rust
//! use qgrn_ir::{Circuit, QubitId, TransferDirection};
//! use std::f64::consts::PI;
//!
//! let mut circuit = Circuit::with_size("toggle", 2, 2);
//!
//! // Gene A starts "on", gene B starts "off".
//! circuit.x(QubitId(0)).unwrap();
//!
//! // A activates B at full strength.
//! circuit
//!     .transfer(PI, TransferDirection::Excite, QubitId(0), QubitId(1))
//!     .unwrap();
//!
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert!(circuit.has_channels());
//! ```
//!
//! # Supported Operations
//!
//! | Operation | Qubits | Description |
//! |-----------|--------|-------------|
//! | `X`, `H` | 1 | Pauli-X and Hadamard |
//! | `Rx`, `Ry`, `Rz` | 1 | Rotation gates |
//! | `CX` | 2 | Controlled-NOT |
//! | `CRy` | 2 | Controlled Y rotation |
//! | `ctransfer` | 2 | Controlled population transfer (channel) |
//! | `decay` | 1 | Amplitude decay toward \|0⟩ (channel) |

pub mod channel;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod noise;
pub mod qubit;

pub use channel::{ControlledTransfer, Decay, KrausSet, TransferDirection};
pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{Gate, StandardGate};
pub use instruction::{Instruction, InstructionKind};
pub use noise::NoiseModel;
pub use qubit::{Clbit, ClbitId, Qubit, QubitId};
