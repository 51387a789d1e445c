//! Diversity statistics over a single species-count map.
//!
//! All four functions are pure. The count invariants (stored counts ≥ 1,
//! absence means zero) are established by [`crate::counter`] and
//! [`crate::aggregate`]; given those, no NaN or infinity can escape here.
//! The degenerate inputs (empty map, single species for evenness) are
//! rejected as [`MetricError::DivisionByZero`] instead.

use crate::error::MetricError;
use crate::types::SpeciesCounts;

/// Number of distinct species observed. 0 for an empty map.
pub fn richness(counts: &SpeciesCounts) -> usize {
    counts.len()
}

/// Shannon diversity index: `|Σ p_i · ln(p_i)|` with `p_i = count_i / total`.
///
/// The raw sum is mathematically ≤ 0; the absolute value guards against
/// floating-point sign artifacts (and maps `-0.0` to `0.0`). Exactly 0 when
/// a single species holds all observations.
///
/// Fails with [`MetricError::DivisionByZero`] when the map is empty.
pub fn shannons(counts: &SpeciesCounts) -> Result<f64, MetricError> {
    let total = total_observations(counts)?;
    let raw: f64 = counts
        .values()
        .map(|&count| {
            let p = f64::from(count) / total;
            p * p.ln()
        })
        .sum();
    Ok(raw.abs())
}

/// Simpson diversity index: `Σ p_i²`, the probability that two random
/// observations are the same species.
///
/// Range `(0, 1]`: 1 when one species dominates completely, approaching
/// `1/richness` when observations are evenly spread.
///
/// Fails with [`MetricError::DivisionByZero`] when the map is empty.
pub fn simpsons(counts: &SpeciesCounts) -> Result<f64, MetricError> {
    let total = total_observations(counts)?;
    let index = counts
        .values()
        .map(|&count| {
            let p = f64::from(count) / total;
            p * p
        })
        .sum();
    Ok(index)
}

/// Species evenness: `shannons / ln(richness)`, in `(0, 1]` with 1 when all
/// species have equal counts.
///
/// The Shannon index is computed first, so an empty map fails with its
/// (zero-total) error; a single-species map then fails because `ln(1) = 0`
/// leaves nothing to normalize by.
pub fn evenness(counts: &SpeciesCounts) -> Result<f64, MetricError> {
    let shannon = shannons(counts)?;
    let richness = richness(counts);
    if richness < 2 {
        return Err(MetricError::DivisionByZero(
            "log-richness is zero for a single species",
        ));
    }
    Ok(shannon / (richness as f64).ln())
}

fn total_observations(counts: &SpeciesCounts) -> Result<f64, MetricError> {
    let total: u64 = counts.values().map(|&count| u64::from(count)).sum();
    if total == 0 {
        return Err(MetricError::DivisionByZero("no observations in species counts"));
    }
    Ok(total as f64)
}
