//! Run-time noise profile.
//!
//! A [`NoiseProfile`] says which physical noise a simulator injects while it
//! executes a circuit:
//!
//! - per-operation depolarizing rates keyed by instruction name (`"ry"`,
//!   `"cry"`, `"ctransfer"`, ...),
//! - channels applied to every operand qubit after every operation,
//! - readout errors, applied as independent bit flips on measured bits.

use std::collections::BTreeMap;

use qgrn_ir::NoiseModel;
use serde::{Deserialize, Serialize};

use crate::error::{HalError, HalResult};

/// Noise injected during a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseProfile {
    /// Depolarizing probability after each operation of the given name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub gate_errors: BTreeMap<String, f64>,
    /// Channels applied to every operand qubit after every operation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub channels: Vec<NoiseModel>,
    /// Readout flip probability for every qubit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readout_error: Option<f64>,
    /// Per-qubit readout flip probabilities; entry `i` overrides the uniform
    /// rate for qubit `i`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub qubit_readout_errors: Vec<f64>,
}

impl NoiseProfile {
    /// Create an empty (noiseless) profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a depolarizing error after every operation named `op`.
    #[must_use]
    pub fn with_gate_error(mut self, op: impl Into<String>, p: f64) -> Self {
        self.gate_errors.insert(op.into(), p);
        self
    }

    /// Add a channel applied after every operation.
    #[must_use]
    pub fn with_channel(mut self, model: NoiseModel) -> Self {
        self.channels.push(model);
        self
    }

    /// Set a uniform readout error.
    #[must_use]
    pub fn with_readout_error(mut self, p: f64) -> Self {
        self.readout_error = Some(p);
        self
    }

    /// Set per-qubit readout errors.
    #[must_use]
    pub fn with_qubit_readout_errors(mut self, errors: Vec<f64>) -> Self {
        self.qubit_readout_errors = errors;
        self
    }

    /// True if the profile injects no noise at all.
    pub fn is_noiseless(&self) -> bool {
        self.gate_errors.values().all(|&p| p == 0.0)
            && self.channels.iter().all(|m| m.error_param() == 0.0)
            && !self.has_readout_error()
    }

    /// True if any qubit has a non-zero readout error.
    pub fn has_readout_error(&self) -> bool {
        self.readout_error.is_some_and(|p| p > 0.0)
            || self.qubit_readout_errors.iter().any(|&p| p > 0.0)
    }

    /// Readout flip probability for a qubit.
    pub fn readout_error_for(&self, qubit: usize) -> f64 {
        self.qubit_readout_errors
            .get(qubit)
            .copied()
            .or(self.readout_error)
            .unwrap_or(0.0)
    }

    /// Channels to apply on each operand after an operation named `op`.
    pub fn channels_after(&self, op: &str) -> Vec<NoiseModel> {
        let mut models = Vec::with_capacity(self.channels.len() + 1);
        if let Some(&p) = self.gate_errors.get(op) {
            if p > 0.0 {
                models.push(NoiseModel::Depolarizing { p });
            }
        }
        models.extend(
            self.channels
                .iter()
                .copied()
                .filter(|m| m.error_param() > 0.0),
        );
        models
    }

    /// Check that every rate is a probability.
    pub fn validate(&self) -> HalResult<()> {
        for (op, &p) in &self.gate_errors {
            check_probability(p, || format!("gate error for '{op}'"))?;
        }
        for model in &self.channels {
            if !model.is_valid() {
                return Err(HalError::InvalidNoise(format!(
                    "{} parameter {} is outside [0, 1]",
                    model.name(),
                    model.error_param()
                )));
            }
        }
        if let Some(p) = self.readout_error {
            check_probability(p, || "readout error".to_string())?;
        }
        for (qubit, &p) in self.qubit_readout_errors.iter().enumerate() {
            check_probability(p, || format!("readout error for qubit {qubit}"))?;
        }
        Ok(())
    }
}

fn check_probability(p: f64, what: impl FnOnce() -> String) -> HalResult<()> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(HalError::InvalidNoise(format!(
            "{} {p} is outside [0, 1]",
            what()
        )))
    }
}
