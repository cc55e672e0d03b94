//! Circuit instructions combining operations with operands.

use serde::{Deserialize, Serialize};

use crate::channel::{ControlledTransfer, Decay, KrausSet, TransferDirection};
use crate::gate::{Gate, StandardGate};
use crate::qubit::{ClbitId, QubitId};

/// The kind of instruction in a circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InstructionKind {
    /// A unitary gate.
    Gate(Gate),
    /// Controlled population transfer on `[control, target]`.
    Transfer(ControlledTransfer),
    /// Amplitude decay of a single qubit.
    Decay(Decay),
    /// Measurement of `qubits[i]` into `clbits[i]`.
    Measure,
    /// Barrier (ordering marker, no effect on the state).
    Barrier,
}

impl InstructionKind {
    /// Short name for logs and error messages.
    pub fn name(&self) -> &str {
        match self {
            InstructionKind::Gate(gate) => gate.name(),
            InstructionKind::Transfer(_) => "ctransfer",
            InstructionKind::Decay(_) => "decay",
            InstructionKind::Measure => "measure",
            InstructionKind::Barrier => "barrier",
        }
    }

    /// Fixed operand count, if the kind has one.
    pub fn arity(&self) -> Option<u32> {
        match self {
            InstructionKind::Gate(gate) => Some(gate.num_qubits()),
            InstructionKind::Transfer(_) => Some(2),
            InstructionKind::Decay(_) => Some(1),
            InstructionKind::Measure | InstructionKind::Barrier => None,
        }
    }

    /// The numeric parameter carried by this instruction, if any.
    pub fn parameter(&self) -> Option<f64> {
        match self {
            InstructionKind::Gate(gate) => gate.kind.angle(),
            InstructionKind::Transfer(t) => Some(t.theta),
            InstructionKind::Decay(d) => Some(d.theta),
            InstructionKind::Measure | InstructionKind::Barrier => None,
        }
    }
}

/// A complete instruction with operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The kind of instruction.
    pub kind: InstructionKind,
    /// Qubits this instruction operates on.
    pub qubits: Vec<QubitId>,
    /// Classical bits this instruction writes (measure only).
    pub clbits: Vec<ClbitId>,
}

impl Instruction {
    /// Create a gate instruction.
    pub fn gate(gate: impl Into<Gate>, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Gate(gate.into()),
            qubits: qubits.into_iter().collect(),
            clbits: vec![],
        }
    }

    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: StandardGate, qubit: QubitId) -> Self {
        Self::gate(gate, [qubit])
    }

    /// Create a two-qubit gate instruction.
    pub fn two_qubit_gate(gate: StandardGate, q1: QubitId, q2: QubitId) -> Self {
        Self::gate(gate, [q1, q2])
    }

    /// Create a controlled transfer instruction.
    pub fn transfer(
        theta: f64,
        direction: TransferDirection,
        control: QubitId,
        target: QubitId,
    ) -> Self {
        Self {
            kind: InstructionKind::Transfer(ControlledTransfer::new(theta, direction)),
            qubits: vec![control, target],
            clbits: vec![],
        }
    }

    /// Create a decay instruction.
    pub fn decay(theta: f64, qubit: QubitId) -> Self {
        Self {
            kind: InstructionKind::Decay(Decay::new(theta)),
            qubits: vec![qubit],
            clbits: vec![],
        }
    }

    /// Create a measurement instruction.
    pub fn measure(qubit: QubitId, clbit: ClbitId) -> Self {
        Self {
            kind: InstructionKind::Measure,
            qubits: vec![qubit],
            clbits: vec![clbit],
        }
    }

    /// Create a multi-qubit measurement instruction.
    ///
    /// Returns an error if the number of qubits and classical bits do not match.
    pub fn measure_all(
        qubits: impl IntoIterator<Item = QubitId>,
        clbits: impl IntoIterator<Item = ClbitId>,
    ) -> crate::error::IrResult<Self> {
        let qubits: Vec<_> = qubits.into_iter().collect();
        let clbits: Vec<_> = clbits.into_iter().collect();
        if qubits.len() != clbits.len() {
            return Err(crate::error::IrError::MeasureArity {
                qubits: qubits.len(),
                clbits: clbits.len(),
            });
        }
        Ok(Self {
            kind: InstructionKind::Measure,
            qubits,
            clbits,
        })
    }

    /// Create a barrier instruction.
    pub fn barrier(qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Barrier,
            qubits: qubits.into_iter().collect(),
            clbits: vec![],
        }
    }

    /// Check if this is a unitary gate.
    pub fn is_gate(&self) -> bool {
        matches!(self.kind, InstructionKind::Gate(_))
    }

    /// Check if this is a non-unitary channel.
    pub fn is_channel(&self) -> bool {
        matches!(
            self.kind,
            InstructionKind::Transfer(_) | InstructionKind::Decay(_)
        )
    }

    /// Check if this is a measurement.
    pub fn is_measure(&self) -> bool {
        matches!(self.kind, InstructionKind::Measure)
    }

    /// Check if this is a barrier.
    pub fn is_barrier(&self) -> bool {
        matches!(self.kind, InstructionKind::Barrier)
    }

    /// Kraus operators for channel instructions.
    pub fn kraus(&self) -> Option<KrausSet> {
        match &self.kind {
            InstructionKind::Transfer(t) => Some(t.kraus()),
            InstructionKind::Decay(d) => Some(d.kraus()),
            _ => None,
        }
    }

    /// Get the name of this instruction.
    pub fn name(&self) -> &str {
        self.kind.name()
    }
}
