// Analysis module - the mimicry scoring pipeline
//
// Orchestrates the per-player scoring sequence:
//   FeatureExtractor -> DdtwAligner (once per feature kind) -> score
//   normalization -> PlayerResult
//
// Each player's scoring is an independent pure computation over immutable
// inputs; there is no shared mutable state. The caller (api module) isolates
// per-player failures and assembles the final leaderboard.

pub mod ddtw;
pub mod features;
pub mod ranking;
pub mod scoring;

use crate::audio::AudioSignal;
use crate::config::{ScoreWeights, ScoringConfig};
use crate::error::ScoringError;
use ddtw::DdtwAligner;
use features::{FeatureExtractor, FeatureKind, FeatureSet};
use log::debug;
use ranking::PlayerResult;
use std::collections::BTreeMap;

/// The full scoring pipeline for one theme
pub struct ScoringPipeline {
    extractor: FeatureExtractor,
    aligner: DdtwAligner,
    weights: ScoreWeights,
}

impl ScoringPipeline {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            extractor: FeatureExtractor::new(config),
            aligner: DdtwAligner::new(),
            weights: config.weights.clone(),
        }
    }

    /// Extract the feature set of a signal (used once for the theme)
    pub fn extract(&self, signal: &AudioSignal) -> Result<FeatureSet, ScoringError> {
        self.extractor.extract(signal)
    }

    /// Score one player against pre-extracted theme features
    ///
    /// Aligns each of the player's tracks against the theme's same-kind
    /// track (query = player, reference = theme), normalizes each cost into
    /// a similarity, and blends them into the total score.
    pub fn score_player(
        &self,
        name: &str,
        audio: &AudioSignal,
        theme_features: &FeatureSet,
    ) -> Result<PlayerResult, ScoringError> {
        let player_features = self.extractor.extract(audio)?;

        let mut similarities = BTreeMap::new();
        for kind in FeatureKind::ALL {
            let query = &player_features[&kind];
            let reference = &theme_features[&kind];
            let alignment = self.aligner.align(query, reference)?;
            let score = scoring::similarity(&alignment, kind)?;
            debug!(
                "[{}] {}: terminal_cost={:.4}, similarity={:.4}",
                name, kind, alignment.terminal_cost, score
            );
            similarities.insert(kind, score);
        }

        let total = scoring::total_score(&similarities, &self.weights);
        Ok(PlayerResult {
            name: name.to_string(),
            similarities,
            total,
        })
    }
}
