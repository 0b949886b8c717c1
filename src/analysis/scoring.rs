// Scoring module - cost normalization and weighted totals
//
// Converts a raw alignment cost into a bounded similarity and blends the
// per-feature similarities into one total score per player.
//
// similarity = 1 - terminal_cost / max(cost_matrix)
//
// The denominator is the maximum over the FULL matrix, so similarity is 1.0
// exactly when the terminal cost is 0 and can in principle go negative for
// pathological inputs; it is not clamped.

use crate::analysis::ddtw::Alignment;
use crate::analysis::features::FeatureKind;
use crate::config::ScoreWeights;
use crate::error::ScoringError;
use std::collections::BTreeMap;

/// Normalize an alignment cost into a similarity score
///
/// # Errors
/// `ScoringError::DegenerateAlignment` when the matrix maximum is zero
/// (both derivative tracks constant), instead of a silent NaN. The caller
/// decides the policy for that case explicitly.
pub fn similarity(alignment: &Alignment, kind: FeatureKind) -> Result<f32, ScoringError> {
    let max_cost = alignment.matrix.max_cost();
    if max_cost == 0.0 {
        return Err(ScoringError::DegenerateAlignment { kind });
    }
    Ok(1.0 - alignment.terminal_cost / max_cost)
}

/// Blend per-feature similarities into the total score
///
/// total = (w_harmonic * s_harmonic + w_zcr * s_zcr) / (w_harmonic + w_zcr)
///
/// With the default 3:7 weights the blend favors rhythmic/energy matching
/// over harmonic matching. A kind missing from the map contributes zero
/// (cannot happen in the pipeline, which always extracts every kind).
pub fn total_score(similarities: &BTreeMap<FeatureKind, f32>, weights: &ScoreWeights) -> f32 {
    let weight_of = |kind: FeatureKind| match kind {
        FeatureKind::HarmonicProfile => weights.harmonic_profile,
        FeatureKind::ZeroCrossingRate => weights.zero_crossing_rate,
    };

    let weight_sum: f32 = FeatureKind::ALL.iter().map(|&k| weight_of(k)).sum();
    if weight_sum <= 0.0 {
        return 0.0;
    }

    let weighted: f32 = FeatureKind::ALL
        .iter()
        .map(|&kind| weight_of(kind) * similarities.get(&kind).copied().unwrap_or(0.0))
        .sum();
    weighted / weight_sum
}
