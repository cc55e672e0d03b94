//! Encoding configuration.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{EncodeError, EncodeResult};

/// Largest rotation angle an edge may map to.
pub const MAX_ANGLE: f64 = PI;

/// How an edge weight becomes a rotation angle: `θ = gain · weight`.
///
/// The mapping is monotonic in the weight. With the default gain of π a
/// weight of 1 is a complete transfer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AngleMapping {
    /// Radians per unit weight, in `(0, π]`.
    pub gain: f64,
    /// Clip angles above [`MAX_ANGLE`] instead of failing.
    pub clip: bool,
}

impl Default for AngleMapping {
    fn default() -> Self {
        Self {
            gain: PI,
            clip: true,
        }
    }
}

impl AngleMapping {
    /// A mapping with the given gain, clipping enabled.
    pub fn with_gain(gain: f64) -> Self {
        Self {
            gain,
            ..Self::default()
        }
    }

    /// The unclipped angle for a weight.
    pub fn raw_angle(&self, weight: f64) -> f64 {
        self.gain * weight
    }

    /// The angle for a weight, or `None` if it exceeds [`MAX_ANGLE`] and
    /// clipping is disabled.
    pub fn angle(&self, weight: f64) -> Option<f64> {
        let theta = self.raw_angle(weight);
        if theta <= MAX_ANGLE {
            Some(theta)
        } else if self.clip {
            Some(MAX_ANGLE)
        } else {
            None
        }
    }

    fn validate(&self) -> EncodeResult<()> {
        if !self.gain.is_finite() || self.gain <= 0.0 || self.gain > MAX_ANGLE {
            return Err(EncodeError::InvalidConfig {
                field: "angle.gain",
                value: self.gain.to_string(),
                reason: "must be in (0, π]",
            });
        }
        Ok(())
    }
}

/// The operation a regulatory edge becomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeEncoding {
    /// Controlled population transfer: activation pumps the target toward
    /// |1⟩, repression drains it toward |0⟩, only where the source is on.
    #[default]
    Transfer,
    /// Controlled-Ry `CRy(θ)` per activating edge. Networks with repressing
    /// edges are rejected.
    Rotation,
}

/// Order in which edges are applied within a regulation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeOrder {
    /// The graph's edge insertion order.
    #[default]
    Insertion,
    /// Sorted by source gene name, then target gene name.
    SourceMajor,
}

/// Settings for [`CircuitEncoder`](crate::CircuitEncoder).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodingConfig {
    /// Weight → angle mapping.
    pub angle: AngleMapping,
    /// Edge operation model.
    pub encoding: EdgeEncoding,
    /// Edge application order.
    pub order: EdgeOrder,
    /// Number of regulation layers, `>= 1`.
    pub steps: u32,
    /// Optional cap on circuit width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_qubits: Option<u32>,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            angle: AngleMapping::default(),
            encoding: EdgeEncoding::default(),
            order: EdgeOrder::default(),
            steps: 1,
            max_qubits: None,
        }
    }
}

impl EncodingConfig {
    /// Set the angle mapping.
    #[must_use]
    pub fn with_angle(mut self, angle: AngleMapping) -> Self {
        self.angle = angle;
        self
    }

    /// Set the edge model.
    #[must_use]
    pub fn with_encoding(mut self, encoding: EdgeEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the edge order.
    #[must_use]
    pub fn with_order(mut self, order: EdgeOrder) -> Self {
        self.order = order;
        self
    }

    /// Set the number of regulation layers.
    #[must_use]
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Cap the circuit width.
    #[must_use]
    pub fn with_max_qubits(mut self, max_qubits: u32) -> Self {
        self.max_qubits = Some(max_qubits);
        self
    }

    /// Check every field.
    pub fn validate(&self) -> EncodeResult<()> {
        self.angle.validate()?;
        if self.steps == 0 {
            return Err(EncodeError::InvalidConfig {
                field: "steps",
                value: self.steps.to_string(),
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}
