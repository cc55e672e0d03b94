//! Counts / distributions → expression profiles.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use qgrn_hal::{Counts, Distribution, ExecutionResult};
use qgrn_network::GeneOrdering;

use crate::error::{DecodeError, DecodeResult};
use crate::profile::ExpressionProfile;

/// Decoder settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Exclude the all-off state and renormalise over what remains.
    pub drop_all_off: bool,
}

impl DecodeOptions {
    /// Options that drop the all-off state.
    pub fn dropping_all_off() -> Self {
        Self { drop_all_off: true }
    }
}

/// Decode an execution result with default options.
pub fn decode(result: &ExecutionResult, ordering: &GeneOrdering) -> DecodeResult<ExpressionProfile> {
    decode_with(result, ordering, DecodeOptions::default())
}

/// Decode an execution result.
///
/// The counts must add up to the shots the backend reports.
pub fn decode_with(
    result: &ExecutionResult,
    ordering: &GeneOrdering,
    options: DecodeOptions,
) -> DecodeResult<ExpressionProfile> {
    let counted = result.counts.total_shots();
    if counted != u64::from(result.shots) {
        return Err(DecodeError::ShotMismatch {
            reported: result.shots,
            counted,
        });
    }
    decode_counts(&result.counts, ordering, options)
}

/// Decode measurement counts.
#[instrument(skip(counts, ordering), fields(genes = ordering.len(), states = counts.len()))]
pub fn decode_counts(
    counts: &Counts,
    ordering: &GeneOrdering,
    options: DecodeOptions,
) -> DecodeResult<ExpressionProfile> {
    if counts.total_shots() == 0 {
        return Err(DecodeError::NoShots);
    }
    // u64 → f64 is exact for any realistic shot count.
    let weights = counts.iter().map(|(bits, n)| (bits, n as f64));
    build_profile(weights, ordering, options, DecodeError::NoShots)
}

/// Decode an exact distribution with default options.
pub fn decode_distribution(
    distribution: &Distribution,
    ordering: &GeneOrdering,
) -> DecodeResult<ExpressionProfile> {
    decode_distribution_with(distribution, ordering, DecodeOptions::default())
}

/// Decode an exact distribution.
#[instrument(skip(distribution, ordering), fields(genes = ordering.len(), states = distribution.len()))]
pub fn decode_distribution_with(
    distribution: &Distribution,
    ordering: &GeneOrdering,
    options: DecodeOptions,
) -> DecodeResult<ExpressionProfile> {
    for (bitstring, value) in distribution.iter() {
        if !value.is_finite() || value < 0.0 {
            return Err(DecodeError::InvalidWeight {
                bitstring: bitstring.to_string(),
                value,
            });
        }
    }
    build_profile(distribution.iter(), ordering, options, DecodeError::ZeroProbability)
}

fn check_bitstring(bitstring: &str, genes: usize) -> DecodeResult<()> {
    let got = bitstring.chars().count();
    if got != genes {
        return Err(DecodeError::LengthMismatch {
            bitstring: bitstring.to_string(),
            expected: genes,
            got,
        });
    }
    if let Some((position, character)) = bitstring
        .chars()
        .enumerate()
        .find(|&(_, c)| c != '0' && c != '1')
    {
        return Err(DecodeError::InvalidCharacter {
            bitstring: bitstring.to_string(),
            character,
            position,
        });
    }
    Ok(())
}

fn build_profile<'a>(
    weights: impl Iterator<Item = (&'a str, f64)>,
    ordering: &GeneOrdering,
    options: DecodeOptions,
    empty: DecodeError,
) -> DecodeResult<ExpressionProfile> {
    let genes = ordering.len();

    // Validate everything before dropping anything.
    let mut kept = Vec::new();
    let mut had_mass = false;
    for (bitstring, weight) in weights {
        check_bitstring(bitstring, genes)?;
        if weight <= 0.0 {
            continue;
        }
        had_mass = true;
        if options.drop_all_off && !bitstring.contains('1') {
            continue;
        }
        kept.push((bitstring, weight));
    }

    if !had_mass {
        return Err(empty);
    }
    let total: f64 = kept.iter().map(|&(_, w)| w).sum();
    if kept.is_empty() || total <= 0.0 {
        return Err(DecodeError::NothingRemaining);
    }

    let mut marginals = vec![0.0; genes];
    let mut states = Distribution::new();
    let mut best: Option<(&str, f64)> = None;
    let mut entropy_bits = 0.0;

    // Input iterates in lexicographic order, so a strict comparison keeps the
    // smallest bitstring among ties.
    for &(bitstring, weight) in &kept {
        let p = weight / total;
        for (i, bit) in bitstring.bytes().enumerate() {
            if bit == b'1' {
                marginals[i] += p;
            }
        }
        states.insert(bitstring, p);
        entropy_bits -= p * p.log2();
        if best.is_none_or(|(_, b)| p > b) {
            best = Some((bitstring, p));
        }
    }

    for m in &mut marginals {
        *m = m.clamp(0.0, 1.0);
    }
    let most_probable_state = best.map(|(s, _)| s.to_string()).unwrap_or_default();

    debug!(
        total,
        distinct = states.len(),
        entropy_bits,
        most_probable = %most_probable_state,
        dropped_all_off = options.drop_all_off,
        "Decoded expression profile"
    );

    Ok(ExpressionProfile {
        genes: ordering.clone(),
        marginals,
        states,
        most_probable_state,
        entropy_bits: entropy_bits.max(0.0),
        total_weight: total,
    })
}
