//! Exact density-matrix evolution.
//!
//! `ρ` over `n` qubits is stored as a vector over `2n` qubits with
//! `ρ[r][c]` at index `r | (c << n)`. Conjugation `K ρ K†` is then `K` on
//! the row qubits `0..n` followed by `K*` on the column qubits `n..2n`, so
//! the statevector kernels do all the work.

use num_complex::Complex64;

use qgrn_hal::{HalError, HalResult};
use qgrn_ir::{KrausSet, StandardGate};

use crate::statevector::{NORM_TOLERANCE, Statevector};

/// A mixed state.
#[derive(Debug, Clone)]
pub(crate) struct DensityMatrix {
    vectorized: Statevector,
    num_qubits: usize,
}

impl DensityMatrix {
    /// `|0…0⟩⟨0…0|`.
    pub fn new(num_qubits: usize) -> Self {
        Self {
            vectorized: Statevector::new(2 * num_qubits),
            num_qubits,
        }
    }

    fn column_qubits(&self, qubits: &[usize]) -> Vec<usize> {
        qubits.iter().map(|q| q + self.num_qubits).collect()
    }

    /// `ρ ← U ρ U†`.
    pub fn apply_gate(&mut self, gate: &StandardGate, qubits: &[usize]) {
        self.vectorized.apply_gate(gate, qubits);
        let columns = self.column_qubits(qubits);
        self.vectorized.apply_gate(&gate.conjugate(), &columns);
    }

    /// `ρ ← Σ K_i ρ K_i†`.
    pub fn apply_kraus(&mut self, kraus: &KrausSet, qubits: &[usize]) {
        let columns = self.column_qubits(qubits);
        let mut result = Statevector::zeroed(2 * self.num_qubits);
        for op in &kraus.operators {
            let conjugate: Vec<Complex64> = op.iter().map(Complex64::conj).collect();
            let mut branch = self.vectorized.clone();
            branch.apply_matrix(op, qubits);
            branch.apply_matrix(&conjugate, &columns);
            result.accumulate(&branch);
        }
        self.vectorized = result;
    }

    /// Diagonal of `ρ`: the probability of every basis state.
    pub fn diagonal(&self) -> Vec<f64> {
        let amplitudes = self.vectorized.amplitudes();
        (0..1usize << self.num_qubits)
            .map(|i| amplitudes[i | (i << self.num_qubits)].re)
            .collect()
    }

    /// Fail on non-finite entries or a trace away from 1.
    pub fn check_valid(&self) -> HalResult<()> {
        let diagonal = self.diagonal();
        if diagonal.iter().any(|p| !p.is_finite()) {
            return Err(HalError::ExecutionFailed(
                "density matrix has non-finite diagonal".into(),
            ));
        }
        let trace: f64 = diagonal.iter().sum();
        if (trace - 1.0).abs() > NORM_TOLERANCE {
            return Err(HalError::ExecutionFailed(format!(
                "density matrix trace drifted to {trace}"
            )));
        }
        Ok(())
    }
}
