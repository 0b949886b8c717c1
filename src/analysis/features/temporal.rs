// Temporal module - time-domain feature extraction
//
// Zero-crossing rate measures how often the signal changes sign within an
// analysis frame. High ZCR indicates noise-like or high-frequency content;
// low ZCR indicates tonal or low-frequency content.

/// Compute the zero-crossing rate of one frame (0.0 to 1.0)
///
/// ZCR = crossings / (frame_length - 1), the fraction of adjacent sample
/// pairs whose signs differ. Frames shorter than two samples have no pairs
/// and return 0.0.
pub fn zero_crossing_rate(frame: &[f32]) -> f32 {
    if frame.len() < 2 {
        return 0.0;
    }

    let mut crossings = 0;
    for i in 1..frame.len() {
        if (frame[i] >= 0.0 && frame[i - 1] < 0.0) || (frame[i] < 0.0 && frame[i - 1] >= 0.0) {
            crossings += 1;
        }
    }

    crossings as f32 / (frame.len() - 1) as f32
}
