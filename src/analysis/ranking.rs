// Ranking module - leaderboard assembly
//
// Sorts scored players by total score, descending. The sort is stable, so
// players with equal totals keep their submission order; no artificial
// tie-break is introduced.

use crate::analysis::features::FeatureKind;
use crate::error::ScoringError;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// One player's scores
///
/// Created once during scoring, immutable after creation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PlayerResult {
    /// Free-form display name supplied by the collaborator
    pub name: String,
    /// Per-feature-kind similarity in [0, 1]
    pub similarities: BTreeMap<FeatureKind, f32>,
    /// Weighted total score in [0, 1]
    pub total: f32,
}

/// A player that could not be scored, with the reason
#[derive(Debug, Clone)]
pub struct SkippedPlayer {
    pub name: String,
    pub error: ScoringError,
}

/// Terminal artifact of a scoring run
///
/// Entries are ordered by total score descending. Players whose scoring
/// failed are listed in `skipped` so the collaborator can render a
/// "could not be scored" marker instead of dropping them silently.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    pub entries: Vec<PlayerResult>,
    pub skipped: Vec<SkippedPlayer>,
}

/// Sort results by total score, descending, stable on ties
///
/// Totals are always finite (failures never reach ranking), so incomparable
/// pairs are treated as equal rather than panicking.
pub fn rank(mut results: Vec<PlayerResult>) -> Vec<PlayerResult> {
    results.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
    results
}
