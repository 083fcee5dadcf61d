use std::f32::consts::TAU;
use std::io::Cursor;

/// Default sample rate for all generated feedback sounds.
pub const SAMPLE_RATE: u32 = 44_100;

/// Mono f32 PCM in the range [-1.0, 1.0].
#[derive(Debug, Clone)]
pub struct Pcm {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl Pcm {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn num_frames(&self) -> usize {
        self.samples.len()
    }

    /// Encode as an in-memory WAV file for kira ingestion.
    pub fn to_wav_bytes(&self) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let mut writer = hound::WavWriter::new(&mut cursor, spec).expect("WAV writer creation");
        for &sample in &self.samples {
            writer.write_sample(sample).expect("WAV sample write");
        }
        writer.finalize().expect("WAV finalize");
        cursor.into_inner()
    }
}

/// Sampled sine tone. Deterministic given its inputs.
pub fn sine_wave(frequency: f32, duration: f32, volume: f32, sample_rate: u32) -> Pcm {
    let frame_count = (sample_rate as f32 * duration) as usize;
    let samples = (0..frame_count)
        .map(|n| {
            let t = n as f32 / sample_rate as f32;
            (TAU * frequency * t).sin() * volume
        })
        .collect();
    Pcm::new(samples, sample_rate)
}

/// Amplitude-modulated sawtooth used for the incorrect-answer buzz.
///
/// A sawtooth at `carrier_freq` is modulated by a low-frequency sine at
/// `mod_freq` (depth 0.5); the result is clamped to [-1.0, 1.0].
pub fn modulated_sawtooth(
    carrier_freq: f32,
    mod_freq: f32,
    duration: f32,
    volume: f32,
    sample_rate: u32,
) -> Pcm {
    let frame_count = (sample_rate as f32 * duration) as usize;
    let samples = (0..frame_count)
        .map(|n| {
            let t = n as f32 / sample_rate as f32;
            let saw = 2.0 * (t * carrier_freq - (0.5 + t * carrier_freq).floor());
            let lfo = 0.5 * (TAU * mod_freq * t).sin();
            (saw * (1.0 + lfo) * volume).clamp(-1.0, 1.0)
        })
        .collect();
    Pcm::new(samples, sample_rate)
}

/// Consecutive sine segments, one per frequency. Used for the game-over
/// fanfare.
pub fn tone_sequence(
    frequencies: &[f32],
    segment_duration: f32,
    volume: f32,
    sample_rate: u32,
) -> Pcm {
    let mut samples = Vec::new();
    for &frequency in frequencies {
        samples.extend(sine_wave(frequency, segment_duration, volume, sample_rate).samples);
    }
    Pcm::new(samples, sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_frame_count_matches_duration() {
        let pcm = sine_wave(440.0, 0.5, 0.5, SAMPLE_RATE);
        assert_eq!(pcm.num_frames(), 22_050);
        assert_eq!(pcm.sample_rate, SAMPLE_RATE);
    }

    #[test]
    fn sine_starts_at_zero_and_peaks_at_volume() {
        // 441 Hz at 44100 Hz puts the quarter-period exactly on sample 25.
        let pcm = sine_wave(441.0, 0.1, 0.5, SAMPLE_RATE);
        assert!(pcm.samples[0].abs() < 1e-6);
        assert!((pcm.samples[25] - 0.5).abs() < 1e-4);
    }

    #[test]
    fn sine_stays_within_volume() {
        let pcm = sine_wave(233.08, 0.5, 0.5, SAMPLE_RATE);
        assert!(pcm.samples.iter().all(|s| s.abs() <= 0.5 + 1e-6));
    }

    #[test]
    fn sawtooth_is_clamped_at_full_volume() {
        // At volume 1.0 the modulation peak pushes past the rails, so the
        // clamp must engage while nothing may escape [-1, 1].
        let pcm = modulated_sawtooth(200.0, 5.0, 0.5, 1.0, SAMPLE_RATE);
        assert!(pcm.samples.iter().all(|s| s.abs() <= 1.0));
        assert!(pcm.samples.iter().any(|s| s.abs() >= 1.0));
    }

    #[test]
    fn sawtooth_at_half_volume_needs_no_clamp() {
        // 0.5 volume * 1.5 peak modulation = 0.75 worst case.
        let pcm = modulated_sawtooth(200.0, 5.0, 0.5, 0.5, SAMPLE_RATE);
        assert!(pcm.samples.iter().all(|s| s.abs() <= 0.75 + 1e-6));
    }

    #[test]
    fn tone_sequence_concatenates_segments() {
        let pcm = tone_sequence(&[523.25, 659.25, 783.99], 0.2, 0.5, SAMPLE_RATE);
        assert_eq!(pcm.num_frames(), 3 * 8_820);
    }

    #[test]
    fn wav_bytes_carry_a_riff_header() {
        let pcm = sine_wave(440.0, 0.01, 0.5, SAMPLE_RATE);
        let bytes = pcm.to_wav_bytes();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
    }
}
