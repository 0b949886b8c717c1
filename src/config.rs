//! Configuration for the scoring pipeline
//!
//! Scoring is driven by a handful of fixed constants (silence threshold,
//! analysis framing, score weights). They live here as named configuration
//! with their stated defaults, loadable from a JSON file for experimentation
//! without recompiling.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub preprocess: PreprocessConfig,
    pub features: FeatureConfig,
    pub weights: ScoreWeights,
}

/// Silence trimming and normalization parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessConfig {
    /// Frames whose RMS energy is more than this many dB below the peak
    /// frame are treated as silence
    pub trim_threshold_db: f32,
    /// Frame length in samples for trim energy measurement
    pub trim_frame_length: usize,
    /// Hop between trim frames in samples
    pub trim_hop_length: usize,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            trim_threshold_db: 25.0,
            trim_frame_length: 2048,
            trim_hop_length: 512,
        }
    }
}

/// Analysis framing for feature extraction
///
/// Both feature kinds share the same framing, giving them the same frame
/// rate (sample_rate / hop_length).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Analysis frame length in samples (also the FFT size)
    pub frame_length: usize,
    /// Hop between analysis frames in samples
    pub hop_length: usize,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            frame_length: 2048,
            hop_length: 512,
        }
    }
}

/// Weights for combining per-feature similarities into the total score
///
/// The default 3:7 split favors rhythmic/energy matching over harmonic
/// matching. Changing the defaults changes every historical comparison, so
/// overrides belong in a config file, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub harmonic_profile: f32,
    pub zero_crossing_rate: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            harmonic_profile: 3.0,
            zero_crossing_rate: 7.0,
        }
    }
}

impl Default for ScoringConfig {
    /// Default configuration values (fallback if config file not found)
    fn default() -> Self {
        Self {
            preprocess: PreprocessConfig::default(),
            features: FeatureConfig::default(),
            weights: ScoreWeights::default(),
        }
    }
}

impl ScoringConfig {
    /// Load configuration from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to JSON config file
    ///
    /// # Returns
    /// The loaded configuration, or defaults if the file is missing or the
    /// JSON is invalid (logged at warn level).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }
}
