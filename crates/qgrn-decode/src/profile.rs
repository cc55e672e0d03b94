//! Decoded expression profiles.

use serde::{Deserialize, Serialize};

use qgrn_hal::Distribution;
use qgrn_network::GeneOrdering;

/// Per-gene "on" probabilities plus joint summaries of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionProfile {
    pub(crate) genes: GeneOrdering,
    pub(crate) marginals: Vec<f64>,
    pub(crate) states: Distribution,
    pub(crate) most_probable_state: String,
    pub(crate) entropy_bits: f64,
    pub(crate) total_weight: f64,
}

impl ExpressionProfile {
    /// Marginal "on" probability of `gene`.
    pub fn probability(&self, gene: &str) -> Option<f64> {
        self.genes
            .position(gene)
            .and_then(|i| self.marginals.get(i).copied())
    }

    /// Marginal of the gene at `position`.
    pub fn marginal(&self, position: usize) -> Option<f64> {
        self.marginals.get(position).copied()
    }

    /// All marginals in gene order.
    pub fn marginals(&self) -> &[f64] {
        &self.marginals
    }

    /// `(gene, probability)` pairs in gene order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.genes
            .names()
            .iter()
            .map(String::as_str)
            .zip(self.marginals.iter().copied())
    }

    /// The gene ordering the profile was decoded with.
    pub fn genes(&self) -> &GeneOrdering {
        &self.genes
    }

    /// Most probable joint state. Ties go to the lexicographically smallest
    /// bitstring.
    pub fn most_probable_state(&self) -> &str {
        &self.most_probable_state
    }

    /// Shannon entropy of the joint distribution, in bits.
    pub fn entropy(&self) -> f64 {
        self.entropy_bits
    }

    /// Number of joint states with nonzero probability.
    pub fn distinct_states(&self) -> usize {
        self.states.len()
    }

    /// Normalised probability of a joint state.
    pub fn state_probability(&self, bitstring: &str) -> f64 {
        self.states.get(bitstring)
    }

    /// The normalised joint distribution.
    pub fn distribution(&self) -> &Distribution {
        &self.states
    }

    /// Weight the profile was normalised by: shots for counts, probability
    /// mass for exact distributions (after any dropped state).
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }
}

impl std::fmt::Display for ExpressionProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (gene, p) in self.iter() {
            writeln!(f, "{gene:>12}  {p:.4}")?;
        }
        write!(
            f,
            "most probable: {}  entropy: {:.4} bits  states: {}",
            self.most_probable_state,
            self.entropy_bits,
            self.distinct_states()
        )
    }
}
