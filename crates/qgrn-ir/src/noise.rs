//! Noise channel types.
//!
//! These are the physical noise processes a simulated backend can inject
//! after every operation. They never appear as encoder output; a backend
//! applies them according to the run's noise profile.

use serde::{Deserialize, Serialize};

use crate::channel::KrausSet;

/// A single-qubit noise channel model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum NoiseModel {
    /// Depolarizing channel: with probability `p`, replaces the state
    /// with the maximally mixed state.
    Depolarizing {
        /// Error probability (0.0 to 1.0).
        p: f64,
    },

    /// Amplitude damping: models energy relaxation (T1 decay).
    AmplitudeDamping {
        /// Damping parameter (0.0 to 1.0).
        gamma: f64,
    },

    /// Phase damping: models dephasing (T2 decay without energy loss).
    PhaseDamping {
        /// Dephasing parameter (0.0 to 1.0).
        gamma: f64,
    },

    /// Bit-flip channel: flips |0⟩ ↔ |1⟩ with probability `p`.
    BitFlip {
        /// Flip probability (0.0 to 1.0).
        p: f64,
    },

    /// Phase-flip channel: applies Z with probability `p`.
    PhaseFlip {
        /// Flip probability (0.0 to 1.0).
        p: f64,
    },
}

impl NoiseModel {
    /// Get a human-readable name for this noise model.
    pub fn name(&self) -> &'static str {
        match self {
            NoiseModel::Depolarizing { .. } => "depolarizing",
            NoiseModel::AmplitudeDamping { .. } => "amplitude_damping",
            NoiseModel::PhaseDamping { .. } => "phase_damping",
            NoiseModel::BitFlip { .. } => "bit_flip",
            NoiseModel::PhaseFlip { .. } => "phase_flip",
        }
    }

    /// Get the primary error parameter of this noise model.
    pub fn error_param(&self) -> f64 {
        match self {
            NoiseModel::Depolarizing { p }
            | NoiseModel::BitFlip { p }
            | NoiseModel::PhaseFlip { p } => *p,
            NoiseModel::AmplitudeDamping { gamma } | NoiseModel::PhaseDamping { gamma } => *gamma,
        }
    }

    /// Whether the error parameter is a probability in `[0, 1]`.
    pub fn is_valid(&self) -> bool {
        let p = self.error_param();
        p.is_finite() && (0.0..=1.0).contains(&p)
    }

    /// Kraus operators of the channel.
    pub fn kraus(&self) -> KrausSet {
        match *self {
            NoiseModel::Depolarizing { p } => {
                let id = (1.0 - 0.75 * p).sqrt();
                let err = (p / 4.0).sqrt();
                let mut set = KrausSet::from_real(
                    1,
                    vec![
                        vec![id, 0.0, 0.0, id],
                        vec![0.0, err, err, 0.0],
                        vec![err, 0.0, 0.0, -err],
                    ],
                );
                // Y = [[0, -i], [i, 0]]
                set.operators.push(vec![
                    num_complex::Complex64::new(0.0, 0.0),
                    num_complex::Complex64::new(0.0, -err),
                    num_complex::Complex64::new(0.0, err),
                    num_complex::Complex64::new(0.0, 0.0),
                ]);
                set
            }
            NoiseModel::AmplitudeDamping { gamma } => KrausSet::from_real(
                1,
                vec![
                    vec![1.0, 0.0, 0.0, (1.0 - gamma).sqrt()],
                    vec![0.0, gamma.sqrt(), 0.0, 0.0],
                ],
            ),
            NoiseModel::PhaseDamping { gamma } => KrausSet::from_real(
                1,
                vec![
                    vec![1.0, 0.0, 0.0, (1.0 - gamma).sqrt()],
                    vec![0.0, 0.0, 0.0, gamma.sqrt()],
                ],
            ),
            NoiseModel::BitFlip { p } => KrausSet::from_real(
                1,
                vec![
                    vec![(1.0 - p).sqrt(), 0.0, 0.0, (1.0 - p).sqrt()],
                    vec![0.0, p.sqrt(), p.sqrt(), 0.0],
                ],
            ),
            NoiseModel::PhaseFlip { p } => KrausSet::from_real(
                1,
                vec![
                    vec![(1.0 - p).sqrt(), 0.0, 0.0, (1.0 - p).sqrt()],
                    vec![p.sqrt(), 0.0, 0.0, -p.sqrt()],
                ],
            ),
        }
    }
}

impl std::fmt::Display for NoiseModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoiseModel::Depolarizing { p } => write!(f, "depolarizing(p={p:.4})"),
            NoiseModel::AmplitudeDamping { gamma } => {
                write!(f, "amplitude_damping(γ={gamma:.4})")
            }
            NoiseModel::PhaseDamping { gamma } => write!(f, "phase_damping(γ={gamma:.4})"),
            NoiseModel::BitFlip { p } => write!(f, "bit_flip(p={p:.4})"),
            NoiseModel::PhaseFlip { p } => write!(f, "phase_flip(p={p:.4})"),
        }
    }
}
