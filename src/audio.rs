// Audio module - decoded signal container and preprocessing
//
// The scoring core never touches files or capture devices; it accepts decoded
// mono PCM samples from its collaborator. Before feature extraction every
// signal goes through the same mandatory preprocessing: trim leading and
// trailing silence against an energy threshold relative to the peak frame,
// then normalize the peak absolute amplitude to 1.0.

use crate::config::PreprocessConfig;
use crate::error::ScoringError;

/// A decoded mono audio signal
///
/// Constructed once from a capture/file source, immutable thereafter.
#[derive(Debug, Clone)]
pub struct AudioSignal {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl AudioSignal {
    /// Create a signal from decoded PCM samples
    ///
    /// # Arguments
    /// * `samples` - Mono samples, nominally in [-1.0, 1.0]
    /// * `sample_rate` - Sample rate in Hz (must be > 0)
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        debug_assert!(sample_rate > 0, "sample rate must be positive");
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Trim leading/trailing silence, then peak-normalize
///
/// Returns the preprocessed sample buffer ready for feature extraction.
///
/// # Errors
/// `ScoringError::EmptySignal` when the input is empty or contains only
/// silence (every frame below the threshold).
pub fn preprocess(signal: &AudioSignal, config: &PreprocessConfig) -> Result<Vec<f32>, ScoringError> {
    let trimmed = trim_silence(signal.samples(), config)?;
    Ok(normalize_peak(trimmed))
}

/// Cut a signal to the span between its first and last non-silent frame
///
/// Energy is measured as frame RMS; a frame is silent when its RMS is more
/// than `trim_threshold_db` below the RMS of the loudest frame. Because the
/// threshold is relative to the peak, only an all-zero signal trims to
/// nothing.
pub fn trim_silence<'a>(
    samples: &'a [f32],
    config: &PreprocessConfig,
) -> Result<&'a [f32], ScoringError> {
    if samples.is_empty() {
        return Err(ScoringError::EmptySignal);
    }

    let frame_length = config.trim_frame_length.min(samples.len());
    let hop = config.trim_hop_length.max(1);

    let rms_per_frame: Vec<f32> = (0..=samples.len() - frame_length)
        .step_by(hop)
        .map(|start| frame_rms(&samples[start..start + frame_length]))
        .collect();

    let peak_rms = rms_per_frame.iter().cloned().fold(0.0_f32, f32::max);
    if peak_rms <= 0.0 {
        return Err(ScoringError::EmptySignal);
    }

    // 25 dB below peak as a linear amplitude ratio
    let threshold = peak_rms * 10.0_f32.powf(-config.trim_threshold_db / 20.0);

    let first = rms_per_frame
        .iter()
        .position(|&rms| rms >= threshold)
        .ok_or(ScoringError::EmptySignal)?;
    let last = rms_per_frame
        .iter()
        .rposition(|&rms| rms >= threshold)
        .ok_or(ScoringError::EmptySignal)?;

    let start = first * hop;
    let end = (last * hop + frame_length).min(samples.len());
    Ok(&samples[start..end])
}

/// Scale samples so the peak absolute value maps to 1.0
///
/// An all-zero buffer is returned unchanged (cannot occur after a successful
/// trim, but the function stays total).
pub fn normalize_peak(samples: &[f32]) -> Vec<f32> {
    let peak = samples.iter().map(|s| s.abs()).fold(0.0_f32, f32::max);
    if peak <= 0.0 {
        return samples.to_vec();
    }
    samples.iter().map(|s| s / peak).collect()
}

fn frame_rms(frame: &[f32]) -> f32 {
    let sum_squares: f32 = frame.iter().map(|s| s * s).sum();
    (sum_squares / frame.len() as f32).sqrt()
}
