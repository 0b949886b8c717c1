// Types module - Data structures for feature tracks
//
// A feature track is a named, one-dimensional time series describing the
// evolution of one acoustic descriptor of a signal. Only tracks of the same
// kind are ever compared against each other.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The acoustic descriptors extracted for scoring
///
/// Ordering is derived so tracks and scores can live in ordered maps with a
/// deterministic iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    /// Windowed pitch-class energy distribution (chroma-like), flattened
    /// across frames
    HarmonicProfile,
    /// Fraction of sign changes per analysis frame
    ZeroCrossingRate,
}

impl FeatureKind {
    /// All kinds required for scoring, in map order
    pub const ALL: [FeatureKind; 2] = [FeatureKind::HarmonicProfile, FeatureKind::ZeroCrossingRate];

    /// Stable string name used in results and error messages
    pub fn name(&self) -> &'static str {
        match self {
            FeatureKind::HarmonicProfile => "harmonic_profile",
            FeatureKind::ZeroCrossingRate => "zero_crossing_rate",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A one-dimensional feature time series
///
/// Produced deterministically from an AudioSignal and a feature kind;
/// immutable after construction. Length is >= 1 for any track that reaches
/// the aligner.
#[derive(Debug, Clone)]
pub struct FeatureTrack {
    kind: FeatureKind,
    values: Vec<f32>,
}

impl FeatureTrack {
    pub fn new(kind: FeatureKind, values: Vec<f32>) -> Self {
        Self { kind, values }
    }

    pub fn kind(&self) -> FeatureKind {
        self.kind
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(FeatureKind::HarmonicProfile.name(), "harmonic_profile");
        assert_eq!(FeatureKind::ZeroCrossingRate.name(), "zero_crossing_rate");
    }

    #[test]
    fn test_kind_ordering_is_deterministic() {
        let mut kinds = vec![FeatureKind::ZeroCrossingRate, FeatureKind::HarmonicProfile];
        kinds.sort();
        assert_eq!(kinds, FeatureKind::ALL.to_vec());
    }

    #[test]
    fn test_track_accessors() {
        let track = FeatureTrack::new(FeatureKind::ZeroCrossingRate, vec![0.1, 0.2]);
        assert_eq!(track.kind(), FeatureKind::ZeroCrossingRate);
        assert_eq!(track.len(), 2);
        assert!(!track.is_empty());
        assert_eq!(track.values(), &[0.1, 0.2]);
    }
}
