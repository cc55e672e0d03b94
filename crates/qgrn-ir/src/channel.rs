//! Non-unitary population-transfer channels.
//!
//! A regulatory edge pushes its target gene toward "on" (activation) or
//! toward "off" (repression), but only in the part of the state where the
//! regulating gene is itself "on". No unitary on the two gene qubits can do
//! that without also pushing population the other way, so these operations
//! are expressed as Kraus channels.
//!
//! For a transfer strength `γ = sin²(θ/2)`:
//!
//! ```text
//!   Excite:  |1⟩_c|0⟩_t  ──γ──→  |1⟩_c|1⟩_t
//!   Relax:   |1⟩_c|1⟩_t  ──γ──→  |1⟩_c|0⟩_t
//!   Decay:        |1⟩_t  ──γ──→       |0⟩_t
//! ```
//!
//! `θ = π` is a complete transfer; `θ = 0` is the identity channel.
//!
//! # Local index convention
//!
//! Kraus matrices are row-major `2^k × 2^k` over the operation's own qubits.
//! Bit `j` of a local basis index is operand `j`, so for a controlled
//! transfer on `[control, target]` the local index is `c + 2·t`.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Direction of a controlled population transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransferDirection {
    /// Move target population from |0⟩ to |1⟩ (activation).
    Excite,
    /// Move target population from |1⟩ to |0⟩ (repression).
    Relax,
}

impl std::fmt::Display for TransferDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransferDirection::Excite => write!(f, "excite"),
            TransferDirection::Relax => write!(f, "relax"),
        }
    }
}

/// Controlled population transfer on `[control, target]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlledTransfer {
    /// Transfer angle in radians, `0 ≤ θ ≤ π` for a monotone strength.
    pub theta: f64,
    /// Which way the target population moves.
    pub direction: TransferDirection,
}

impl ControlledTransfer {
    /// Create a new controlled transfer.
    pub fn new(theta: f64, direction: TransferDirection) -> Self {
        Self { theta, direction }
    }

    /// Probability that the transfer fires when it can.
    pub fn probability(&self) -> f64 {
        transfer_probability(self.theta)
    }

    /// Kraus operators over `[control, target]`.
    pub fn kraus(&self) -> KrausSet {
        let gamma = self.probability();
        let (source, dest) = match self.direction {
            TransferDirection::Excite => (0b01, 0b11),
            TransferDirection::Relax => (0b11, 0b01),
        };
        KrausSet::transfer(2, source, dest, gamma)
    }
}

/// Uncontrolled amplitude decay of a single qubit toward |0⟩.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decay {
    /// Decay angle in radians.
    pub theta: f64,
}

impl Decay {
    /// Create a new decay channel.
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }

    /// Probability that an excited qubit decays.
    pub fn probability(&self) -> f64 {
        transfer_probability(self.theta)
    }

    /// Kraus operators over the single qubit.
    pub fn kraus(&self) -> KrausSet {
        KrausSet::transfer(1, 0b1, 0b0, self.probability())
    }
}

fn transfer_probability(theta: f64) -> f64 {
    (theta / 2.0).sin().powi(2)
}

/// A set of Kraus operators `{K_i}` with `Σ K_i† K_i = I`.
#[derive(Debug, Clone, PartialEq)]
pub struct KrausSet {
    /// Number of qubits the operators act on.
    pub num_qubits: u32,
    /// Row-major `2^k × 2^k` matrices.
    pub operators: Vec<Vec<Complex64>>,
}

impl KrausSet {
    /// Matrix dimension `2^k`.
    pub fn dim(&self) -> usize {
        1 << self.num_qubits
    }

    /// Build a channel from real-weighted matrices.
    pub fn from_real(num_qubits: u32, operators: Vec<Vec<f64>>) -> Self {
        Self {
            num_qubits,
            operators: operators
                .into_iter()
                .map(|m| m.into_iter().map(|v| Complex64::new(v, 0.0)).collect())
                .collect(),
        }
    }

    /// Two-operator channel moving basis state `source` into `dest` with
    /// probability `gamma`, leaving every other basis state untouched.
    fn transfer(num_qubits: u32, source: usize, dest: usize, gamma: f64) -> Self {
        let dim = 1usize << num_qubits;
        let mut stay = vec![0.0; dim * dim];
        for i in 0..dim {
            stay[i * dim + i] = 1.0;
        }
        stay[source * dim + source] = (1.0 - gamma).sqrt();

        let mut jump = vec![0.0; dim * dim];
        jump[dest * dim + source] = gamma.sqrt();

        Self::from_real(num_qubits, vec![stay, jump])
    }

    /// Check completeness `Σ K_i† K_i = I` within `tol`.
    pub fn is_trace_preserving(&self, tol: f64) -> bool {
        let dim = self.dim();
        for row in 0..dim {
            for col in 0..dim {
                let mut sum = Complex64::new(0.0, 0.0);
                for k in &self.operators {
                    for m in 0..dim {
                        sum += k[m * dim + row].conj() * k[m * dim + col];
                    }
                }
                let expected = if row == col { 1.0 } else { 0.0 };
                if (sum - Complex64::new(expected, 0.0)).norm() > tol {
                    return false;
                }
            }
        }
        true
    }
}
