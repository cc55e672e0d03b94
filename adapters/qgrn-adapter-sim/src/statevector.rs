//! Statevector simulation engine.

use num_complex::Complex64;
use rand::Rng;

use qgrn_hal::{HalError, HalResult};
use qgrn_ir::{KrausSet, StandardGate};

/// Allowed drift of the squared norm away from 1.
pub(crate) const NORM_TOLERANCE: f64 = 1e-6;

/// A statevector representing a quantum state.
///
/// Bit `q` of a basis index is qubit `q`.
#[derive(Debug, Clone)]
pub(crate) struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let mut sv = Self::zeroed(num_qubits);
        sv.amplitudes[0] = Complex64::new(1.0, 0.0);
        sv
    }

    /// The all-zero vector (not a valid state; used as an accumulator).
    pub fn zeroed(num_qubits: usize) -> Self {
        Self {
            amplitudes: vec![Complex64::new(0.0, 0.0); 1 << num_qubits],
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Apply a standard gate to specific qubits.
    pub fn apply_gate(&mut self, gate: &StandardGate, qubits: &[usize]) {
        match *gate {
            StandardGate::X => self.apply_x(qubits[0]),
            StandardGate::H => self.apply_h(qubits[0]),
            StandardGate::Rx(theta) => self.apply_rx(qubits[0], theta),
            StandardGate::Ry(theta) => self.apply_ry(qubits[0], theta),
            StandardGate::Rz(theta) => self.apply_rz(qubits[0], theta),
            StandardGate::CX => self.apply_cx(qubits[0], qubits[1]),
            StandardGate::CRy(theta) => self.apply_cry(qubits[0], qubits[1], theta),
        }
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_rx(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        let neg_i_s = Complex64::new(0.0, -s);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a + neg_i_s * b;
                self.amplitudes[j] = neg_i_s * a + c * b;
            }
        }
    }

    fn apply_ry(&mut self, qubit: usize, theta: f64) {
        self.apply_controlled_ry(0, qubit, theta);
    }

    fn apply_rz(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                self.amplitudes[i] *= phase_0;
            } else {
                self.amplitudes[i] *= phase_1;
            }
        }
    }

    // =========================================================================
    // Two-qubit gate implementations
    // =========================================================================

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_cry(&mut self, control: usize, target: usize, theta: f64) {
        self.apply_controlled_ry(1 << control, target, theta);
    }

    /// Ry on `target` in the subspace where every bit of `ctrl_mask` is set.
    fn apply_controlled_ry(&mut self, ctrl_mask: usize, target: usize, theta: f64) {
        let tgt_mask = 1 << target;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask == ctrl_mask) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a - s * b;
                self.amplitudes[j] = s * a + c * b;
            }
        }
    }

    // =========================================================================
    // General local operators
    // =========================================================================

    /// Basis offsets of each local index of `qubits`.
    fn local_offsets(qubits: &[usize]) -> Vec<usize> {
        (0..1usize << qubits.len())
            .map(|local| {
                qubits
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| (local >> j) & 1 == 1)
                    .map(|(_, &q)| 1usize << q)
                    .sum()
            })
            .collect()
    }

    /// Apply a row-major `2^k × 2^k` matrix on `qubits`; operand `j` is bit
    /// `j` of the local index.
    pub fn apply_matrix(&mut self, matrix: &[Complex64], qubits: &[usize]) {
        let offsets = Self::local_offsets(qubits);
        let dim = offsets.len();
        let mask: usize = offsets[dim - 1];
        let mut local = vec![Complex64::new(0.0, 0.0); dim];

        for base in 0..(1usize << self.num_qubits) {
            if base & mask != 0 {
                continue;
            }
            for (l, &off) in offsets.iter().enumerate() {
                local[l] = self.amplitudes[base | off];
            }
            for (r, &off) in offsets.iter().enumerate() {
                let row = &matrix[r * dim..(r + 1) * dim];
                self.amplitudes[base | off] = row.iter().zip(&local).map(|(m, a)| m * a).sum();
            }
        }
    }

    /// Squared norm of `matrix · ψ` without modifying the state.
    fn branch_weight(&self, matrix: &[Complex64], offsets: &[usize]) -> f64 {
        let dim = offsets.len();
        let mask = offsets[dim - 1];
        let mut weight = 0.0;
        for base in 0..(1usize << self.num_qubits) {
            if base & mask != 0 {
                continue;
            }
            for r in 0..dim {
                let amp: Complex64 = (0..dim)
                    .map(|c| matrix[r * dim + c] * self.amplitudes[base | offsets[c]])
                    .sum();
                weight += amp.norm_sqr();
            }
        }
        weight
    }

    /// Apply one stochastically chosen Kraus branch (quantum trajectory step).
    ///
    /// Branch `i` is chosen with probability `‖K_i ψ‖²`; the state is then
    /// renormalised. Returns the chosen branch index.
    pub fn apply_kraus<R: Rng>(
        &mut self,
        kraus: &KrausSet,
        qubits: &[usize],
        rng: &mut R,
    ) -> HalResult<usize> {
        let offsets = Self::local_offsets(qubits);
        let weights: Vec<f64> = kraus
            .operators
            .iter()
            .map(|op| self.branch_weight(op, &offsets))
            .collect();
        let total: f64 = weights.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(HalError::ExecutionFailed(format!(
                "Kraus branches on {qubits:?} have total weight {total}"
            )));
        }

        let r: f64 = rng.r#gen::<f64>() * total;
        let mut cumulative = 0.0;
        let mut chosen = None;
        for (i, &w) in weights.iter().enumerate() {
            if w <= 0.0 {
                continue;
            }
            cumulative += w;
            chosen = Some((i, w));
            if r < cumulative {
                break;
            }
        }
        let (index, weight) = chosen.ok_or_else(|| {
            HalError::ExecutionFailed("no Kraus branch has positive weight".into())
        })?;

        self.apply_matrix(&kraus.operators[index], qubits);
        let scale = 1.0 / weight.sqrt();
        for amp in &mut self.amplitudes {
            *amp *= scale;
        }
        Ok(index)
    }

    /// Add another vector of the same size element-wise.
    pub fn accumulate(&mut self, other: &Statevector) {
        for (a, b) in self.amplitudes.iter_mut().zip(&other.amplitudes) {
            *a += *b;
        }
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Squared norm.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Born probabilities of every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Fail if any amplitude is non-finite or the norm drifted from 1.
    pub fn check_valid(&self) -> HalResult<()> {
        if let Some(i) = self
            .amplitudes
            .iter()
            .position(|a| !a.re.is_finite() || !a.im.is_finite())
        {
            return Err(HalError::ExecutionFailed(format!(
                "amplitude of basis state {i} is not finite"
            )));
        }
        let norm = self.norm_sqr();
        if (norm - 1.0).abs() > NORM_TOLERANCE {
            return Err(HalError::ExecutionFailed(format!(
                "state norm drifted to {norm}"
            )));
        }
        Ok(())
    }

    /// Sample a measurement outcome.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.r#gen();

        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }

        // Rounding can leave the cumulative sum a hair below r.
        self.amplitudes
            .iter()
            .rposition(|a| a.norm_sqr() > 0.0)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qgrn_ir::{ControlledTransfer, Decay, TransferDirection};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f64::consts::PI;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(1.0, 0.0)));
        assert!(sv.amplitudes[1..].iter().all(|a| approx_eq(*a, Complex64::new(0.0, 0.0))));
        assert!(sv.check_valid().is_ok());
    }

    #[test]
    fn test_hadamard() {
        let mut sv = Statevector::new(1);
        sv.apply_gate(&StandardGate::H, &[0]);

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_bell_state() {
        let mut sv = Statevector::new(2);
        sv.apply_gate(&StandardGate::H, &[0]);
        sv.apply_gate(&StandardGate::CX, &[0, 1]);

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_ry_population() {
        let mut sv = Statevector::new(1);
        sv.apply_gate(&StandardGate::Ry(2.0 * 0.3f64.sqrt().asin()), &[0]);
        assert!((sv.probabilities()[1] - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_cry_only_acts_when_control_set() {
        let mut sv = Statevector::new(2);
        sv.apply_gate(&StandardGate::CRy(PI), &[0, 1]);
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(1.0, 0.0)));

        sv.apply_gate(&StandardGate::X, &[0]);
        sv.apply_gate(&StandardGate::CRy(PI), &[0, 1]);
        assert!((sv.probabilities()[0b11] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_apply_matrix_matches_kernel() {
        let mut a = Statevector::new(3);
        let mut b = Statevector::new(3);
        for sv in [&mut a, &mut b] {
            sv.apply_gate(&StandardGate::H, &[0]);
            sv.apply_gate(&StandardGate::Ry(0.7), &[2]);
        }
        a.apply_gate(&StandardGate::CX, &[2, 0]);

        // CX with control = operand 0 (qubit 2), target = operand 1 (qubit 0).
        let one = Complex64::new(1.0, 0.0);
        let zero = Complex64::new(0.0, 0.0);
        let mut cx = vec![zero; 16];
        for (row, col) in [(0, 0), (1, 3), (2, 2), (3, 1)] {
            cx[row * 4 + col] = one;
        }
        b.apply_matrix(&cx, &[2, 0]);

        for (x, y) in a.amplitudes().iter().zip(b.amplitudes()) {
            assert!(approx_eq(*x, *y));
        }
    }

    #[test]
    fn test_full_transfer_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut sv = Statevector::new(2);
        sv.apply_gate(&StandardGate::X, &[0]);

        let excite = ControlledTransfer::new(PI, TransferDirection::Excite).kraus();
        sv.apply_kraus(&excite, &[0, 1], &mut rng).unwrap();
        assert!((sv.probabilities()[0b11] - 1.0).abs() < 1e-12);

        let relax = ControlledTransfer::new(PI, TransferDirection::Relax).kraus();
        sv.apply_kraus(&relax, &[0, 1], &mut rng).unwrap();
        assert!((sv.probabilities()[0b01] - 1.0).abs() < 1e-12);
        assert!(sv.check_valid().is_ok());
    }

    #[test]
    fn test_transfer_without_control_does_nothing() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut sv = Statevector::new(2);
        let excite = ControlledTransfer::new(PI, TransferDirection::Excite).kraus();
        let branch = sv.apply_kraus(&excite, &[0, 1], &mut rng).unwrap();
        assert_eq!(branch, 0);
        assert!((sv.probabilities()[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_decay_branch_frequency() {
        let mut rng = StdRng::seed_from_u64(3);
        let decay = Decay::new(PI / 2.0).kraus();
        let mut decayed = 0;
        for _ in 0..2000 {
            let mut sv = Statevector::new(1);
            sv.apply_gate(&StandardGate::X, &[0]);
            sv.apply_kraus(&decay, &[0], &mut rng).unwrap();
            if sv.sample(&mut rng) == 0 {
                decayed += 1;
            }
        }
        // γ = 0.5
        assert!((800..1200).contains(&decayed), "decayed = {decayed}");
    }

    #[test]
    fn test_check_valid_rejects_drift() {
        let mut sv = Statevector::new(1);
        sv.amplitudes[1] = Complex64::new(0.5, 0.0);
        assert!(matches!(sv.check_valid(), Err(HalError::ExecutionFailed(_))));

        sv.amplitudes[1] = Complex64::new(f64::NAN, 0.0);
        assert!(matches!(sv.check_valid(), Err(HalError::ExecutionFailed(_))));
    }

    #[test]
    fn test_sample_deterministic() {
        // |1⟩ state should always sample to 1
        let mut rng = StdRng::seed_from_u64(0);
        let mut sv = Statevector::new(1);
        sv.apply_gate(&StandardGate::X, &[0]);

        for _ in 0..100 {
            assert_eq!(sv.sample(&mut rng), 1);
        }
    }
}
