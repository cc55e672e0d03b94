//! Execution results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Measurement counts keyed by bitstring.
///
/// Character `i` of a bitstring is classical bit `i`. Keys iterate in
/// lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts {
    counts: BTreeMap<String, u64>,
}

impl Counts {
    /// Create empty counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` observations of `bitstring`.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.counts.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Number of times `bitstring` was observed.
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total_shots(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct bitstrings.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate in lexicographic bitstring order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Outcomes sorted by count, highest first; equal counts keep
    /// lexicographic order.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// The most frequent outcome; ties go to the smallest bitstring.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.sorted().into_iter().next()
    }

    /// Relative frequencies.
    pub fn probabilities(&self) -> Distribution {
        let total = self.total_shots();
        let mut dist = Distribution::new();
        if total == 0 {
            return dist;
        }
        for (bitstring, count) in self.iter() {
            dist.insert(bitstring, count as f64 / total as f64);
        }
        dist
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Counts {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut counts = Counts::new();
        for (bitstring, count) in iter {
            counts.insert(bitstring, count);
        }
        counts
    }
}

/// Exact probability per bitstring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution {
    probabilities: BTreeMap<String, f64>,
}

impl Distribution {
    /// Create an empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add probability mass to `bitstring`.
    pub fn insert(&mut self, bitstring: impl Into<String>, p: f64) {
        *self.probabilities.entry(bitstring.into()).or_insert(0.0) += p;
    }

    /// Probability of `bitstring`.
    pub fn get(&self, bitstring: &str) -> f64 {
        self.probabilities.get(bitstring).copied().unwrap_or(0.0)
    }

    /// Total mass.
    pub fn total(&self) -> f64 {
        self.probabilities.values().sum()
    }

    /// Number of bitstrings with an entry.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// True if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Iterate in lexicographic bitstring order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.probabilities.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Drop entries at or below `threshold`.
    #[must_use]
    pub fn pruned(&self, threshold: f64) -> Self {
        self.iter().filter(|&(_, p)| p > threshold).collect()
    }

    /// Kullback-Leibler divergence `D(self ‖ other)` in bits.
    ///
    /// Both sides are normalised first. Returns infinity when `self` puts
    /// mass on an outcome `other` never produces.
    pub fn kl_divergence(&self, other: &Distribution) -> f64 {
        let p_total = self.total();
        let q_total = other.total();
        if p_total <= 0.0 || q_total <= 0.0 {
            return f64::NAN;
        }

        let mut divergence = 0.0;
        for (bitstring, p) in self.iter() {
            let p = p / p_total;
            if p <= 0.0 {
                continue;
            }
            let q = other.get(bitstring) / q_total;
            if q <= 0.0 {
                return f64::INFINITY;
            }
            divergence += p * (p / q).log2();
        }
        divergence.max(0.0)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Distribution {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut dist = Distribution::new();
        for (bitstring, p) in iter {
            dist.insert(bitstring, p);
        }
        dist
    }
}

/// Result of running a circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measurement counts.
    pub counts: Counts,
    /// Number of shots requested.
    pub shots: u32,
    /// Seed the run actually used, if the backend is seeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Wall-clock execution time in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a new result.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            seed: None,
            execution_time_ms: None,
        }
    }

    /// Record the seed used.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Record the execution time.
    #[must_use]
    pub fn with_execution_time(mut self, ms: u64) -> Self {
        self.execution_time_ms = Some(ms);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_accumulate() {
        let mut counts = Counts::new();
        counts.insert("01", 3);
        counts.insert("01", 2);
        counts.insert("11", 5);
        assert_eq!(counts.get("01"), 5);
        assert_eq!(counts.get("00"), 0);
        assert_eq!(counts.total_shots(), 10);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_most_frequent_tie_breaks_lexicographically() {
        let counts: Counts = [("11", 4), ("01", 4), ("00", 1)].into_iter().collect();
        assert_eq!(counts.most_frequent(), Some(("01", 4)));
        assert_eq!(counts.sorted()[1], ("11", 4));
    }

    #[test]
    fn test_probabilities() {
        let counts: Counts = [("0", 1), ("1", 3)].into_iter().collect();
        let dist = counts.probabilities();
        assert!((dist.get("1") - 0.75).abs() < 1e-12);
        assert!((dist.total() - 1.0).abs() < 1e-12);
        assert!(Counts::new().probabilities().is_empty());
    }

    #[test]
    fn test_kl_divergence() {
        let p: Distribution = [("0", 0.5), ("1", 0.5)].into_iter().collect();
        let q: Distribution = [("0", 0.75), ("1", 0.25)].into_iter().collect();
        assert!(p.kl_divergence(&p).abs() < 1e-12);

        // 0.5·log2(0.5/0.75) + 0.5·log2(0.5/0.25)
        let expected = 0.5 * (2.0f64 / 3.0).log2() + 0.5;
        assert!((p.kl_divergence(&q) - expected).abs() < 1e-12);

        let r: Distribution = [("0", 1.0)].into_iter().collect();
        assert!(p.kl_divergence(&r).is_infinite());
        assert!(r.kl_divergence(&p).is_finite());
    }

    #[test]
    fn test_pruned() {
        let dist: Distribution = [("00", 0.5), ("01", 1e-15), ("11", 0.5)].into_iter().collect();
        assert_eq!(dist.pruned(1e-12).len(), 2);
    }

    #[test]
    fn test_result_serde() {
        let counts: Counts = [("10", 7)].into_iter().collect();
        let result = ExecutionResult::new(counts, 7).with_seed(42);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"counts":{"10":7},"shots":7,"seed":42}"#);
    }
}
