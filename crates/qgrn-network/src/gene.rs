//! Genes and regulatory edges.

use serde::{Deserialize, Serialize};

/// Default weight of a regulatory edge.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A gene and its initial expression probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gene {
    name: String,
    initial: f64,
}

impl Gene {
    /// Create a gene. Validation happens when the graph is built.
    pub fn new(name: impl Into<String>, initial: f64) -> Self {
        Self {
            name: name.into(),
            initial,
        }
    }

    /// Gene name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Probability that the gene starts expressed.
    pub fn initial(&self) -> f64 {
        self.initial
    }
}

/// Sign of a regulatory interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    /// The source pushes the target toward "on".
    #[serde(alias = "activation", alias = "+")]
    Activating,
    /// The source pushes the target toward "off".
    #[serde(alias = "repression", alias = "-")]
    Repressing,
}

impl Sign {
    /// The opposite sign.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Sign::Activating => Sign::Repressing,
            Sign::Repressing => Sign::Activating,
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sign::Activating => write!(f, "activating"),
            Sign::Repressing => write!(f, "repressing"),
        }
    }
}

/// A directed, signed, weighted regulatory relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulatoryEdge {
    /// Regulating gene.
    pub source: String,
    /// Regulated gene.
    pub target: String,
    /// Activation or repression.
    pub sign: Sign,
    /// Interaction strength, `>= 0`.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

impl RegulatoryEdge {
    /// Create an edge with an explicit weight.
    pub fn new(source: impl Into<String>, target: impl Into<String>, sign: Sign, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            sign,
            weight,
        }
    }

    /// Activating edge with the default weight.
    pub fn activating(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(source, target, Sign::Activating, DEFAULT_WEIGHT)
    }

    /// Repressing edge with the default weight.
    pub fn repressing(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(source, target, Sign::Repressing, DEFAULT_WEIGHT)
    }

    /// Whether source and target are the same gene.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// The same edge with its sign flipped.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            sign: self.sign.flipped(),
            ..self.clone()
        }
    }
}

impl std::fmt::Display for RegulatoryEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arrow = match self.sign {
            Sign::Activating => "->",
            Sign::Repressing => "-|",
        };
        write!(f, "{} {arrow} {} (w={})", self.source, self.target, self.weight)
    }
}
