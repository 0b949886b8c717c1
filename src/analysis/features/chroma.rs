// Chroma module - pitch-class energy distribution
//
// Computes a 12-bin chroma-like profile per analysis frame: each magnitude
// spectrum bin's energy is accumulated into the pitch class of its center
// frequency, and each frame's profile is scaled so its maximum bin is 1.0.
//
// The per-frame profiles are then flattened into a single 1-D track in
// bin-major order (pitch class 0 across all frames, then pitch class 1, and
// so on), the flatten of a (bins, frames) array. This conflates the time and
// pitch-class axes into one warped dimension. A higher-fidelity variant
// could warp each pitch-class row independently instead.

/// Number of pitch classes in an octave
pub const PITCH_CLASSES: usize = 12;

/// Bins below this frequency carry no usable pitch information
const MIN_FREQ_HZ: f32 = 20.0;

/// Pitch-class energy computation over magnitude spectra
pub struct HarmonicProfile {
    sample_rate: u32,
    fft_size: usize,
}

impl HarmonicProfile {
    /// # Arguments
    /// * `sample_rate` - Audio sample rate in Hz
    /// * `fft_size` - FFT frame size used to produce the spectra
    pub fn new(sample_rate: u32, fft_size: usize) -> Self {
        Self {
            sample_rate,
            fft_size,
        }
    }

    /// Compute one frame's normalized pitch-class energy profile
    ///
    /// Energy (magnitude squared) of every spectrum bin at or above 20 Hz is
    /// accumulated into `round(69 + 12*log2(f/440)) mod 12`. The profile is
    /// scaled so its maximum is 1.0; an all-silent frame stays all zeros.
    pub fn pitch_class_frame(&self, spectrum: &[f32]) -> [f32; PITCH_CLASSES] {
        let freq_bin_width = self.sample_rate as f32 / self.fft_size as f32;
        let mut energies = [0.0_f32; PITCH_CLASSES];

        for (i, &mag) in spectrum.iter().enumerate() {
            let freq = i as f32 * freq_bin_width;
            if freq < MIN_FREQ_HZ {
                continue;
            }
            let midi = 69.0 + 12.0 * (freq / 440.0).log2();
            let pitch_class = (midi.round() as i32).rem_euclid(PITCH_CLASSES as i32) as usize;
            energies[pitch_class] += mag * mag;
        }

        let max_energy = energies.iter().cloned().fold(0.0_f32, f32::max);
        if max_energy > 0.0 {
            for e in energies.iter_mut() {
                *e /= max_energy;
            }
        }
        energies
    }
}

/// Flatten per-frame profiles into one track, bin-major
///
/// Output length is `PITCH_CLASSES * frames.len()`.
pub fn flatten_frames(frames: &[[f32; PITCH_CLASSES]]) -> Vec<f32> {
    let mut track = Vec::with_capacity(PITCH_CLASSES * frames.len());
    for pitch_class in 0..PITCH_CLASSES {
        for frame in frames {
            track.push(frame[pitch_class]);
        }
    }
    track
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::features::fft::FftProcessor;

    #[test]
    fn test_sine_concentrates_in_one_pitch_class() {
        let sample_rate = 22050;
        let fft_size = 2048;
        let fft = FftProcessor::new(fft_size);
        let profile = HarmonicProfile::new(sample_rate, fft_size);

        // A4 = 440 Hz, pitch class 9 (A)
        let frame: Vec<f32> = (0..fft_size)
            .map(|i| {
                let t = i as f32 / sample_rate as f32;
                (2.0 * std::f32::consts::PI * 440.0 * t).sin()
            })
            .collect();
        let energies = profile.pitch_class_frame(&fft.magnitude_spectrum(&frame));

        let peak_class = energies
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak_class, 9, "Expected 440 Hz energy in pitch class A");
        assert_eq!(energies[peak_class], 1.0, "Peak class normalized to 1.0");
    }

    #[test]
    fn test_silent_frame_stays_zero() {
        let profile = HarmonicProfile::new(22050, 2048);
        let energies = profile.pitch_class_frame(&vec![0.0; 1025]);
        assert_eq!(energies, [0.0; PITCH_CLASSES]);
    }

    #[test]
    fn test_flatten_is_bin_major() {
        let frames = [[1.0; PITCH_CLASSES], [2.0; PITCH_CLASSES]];
        let mut frames = frames;
        frames[0][0] = 10.0;
        frames[1][0] = 20.0;

        let track = flatten_frames(&frames);
        assert_eq!(track.len(), PITCH_CLASSES * 2);
        // Pitch class 0 of both frames comes first
        assert_eq!(&track[..2], &[10.0, 20.0]);
        // Then pitch class 1 of both frames
        assert_eq!(&track[2..4], &[1.0, 2.0]);
    }
}
