// FeatureExtractor - acoustic feature tracks for mimicry scoring
//
// Converts a raw mono signal into the feature tracks the aligner compares:
// a harmonic (pitch-class energy) profile and a zero-crossing-rate track.
// Both use the same framing, so they share a frame rate of
// sample_rate / hop_length.
//
// Module organization:
// - types: FeatureKind and FeatureTrack
// - fft: Hann-windowed magnitude spectrum
// - chroma: pitch-class energy profile (harmonic_profile)
// - temporal: zero-crossing rate (zero_crossing_rate)
// - mod.rs: coordinator (FeatureExtractor)

pub mod chroma;
pub mod fft;
pub mod temporal;
mod types;

pub use types::{FeatureKind, FeatureTrack};

use crate::audio::{self, AudioSignal};
use crate::config::{FeatureConfig, PreprocessConfig, ScoringConfig};
use crate::error::ScoringError;
use chroma::HarmonicProfile;
use fft::FftProcessor;
use std::collections::BTreeMap;

/// All feature tracks extracted from one signal, keyed by kind
pub type FeatureSet = BTreeMap<FeatureKind, FeatureTrack>;

/// FeatureExtractor coordinates the preprocessing and extraction pipeline
///
/// Preprocessing is mandatory and ordered: silence trimming first, then peak
/// normalization, then framing and per-kind feature computation.
pub struct FeatureExtractor {
    preprocess: PreprocessConfig,
    framing: FeatureConfig,
    fft: FftProcessor,
}

impl FeatureExtractor {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            preprocess: config.preprocess.clone(),
            framing: config.features.clone(),
            fft: FftProcessor::new(config.features.frame_length),
        }
    }

    /// Extract every scoring feature track from one signal
    ///
    /// # Errors
    /// * `ScoringError::EmptySignal` - silence-only input trimmed to nothing
    /// * `ScoringError::InsufficientSamples` - trimmed signal shorter than
    ///   one analysis frame
    pub fn extract(&self, signal: &AudioSignal) -> Result<FeatureSet, ScoringError> {
        let samples = audio::preprocess(signal, &self.preprocess)?;

        let frame_length = self.framing.frame_length;
        if samples.len() < frame_length {
            return Err(ScoringError::InsufficientSamples {
                required: frame_length,
                actual: samples.len(),
            });
        }

        let hop = self.framing.hop_length.max(1);
        let profile = HarmonicProfile::new(signal.sample_rate(), frame_length);

        let mut chroma_frames = Vec::new();
        let mut zcr_values = Vec::new();
        for start in (0..=samples.len() - frame_length).step_by(hop) {
            let frame = &samples[start..start + frame_length];
            let spectrum = self.fft.magnitude_spectrum(frame);
            chroma_frames.push(profile.pitch_class_frame(&spectrum));
            zcr_values.push(temporal::zero_crossing_rate(frame));
        }

        let mut tracks = FeatureSet::new();
        tracks.insert(
            FeatureKind::HarmonicProfile,
            FeatureTrack::new(
                FeatureKind::HarmonicProfile,
                chroma::flatten_frames(&chroma_frames),
            ),
        );
        tracks.insert(
            FeatureKind::ZeroCrossingRate,
            FeatureTrack::new(FeatureKind::ZeroCrossingRate, zcr_values),
        );
        Ok(tracks)
    }
}
