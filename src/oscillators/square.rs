//! Square waveform.

/// Sign of `sin(angle)` as a unit square sample.
///
/// Zero maps to `+1.0`.
///
/// # Examples
///
/// ```
/// use wavescope::square_sign;
///
/// assert_eq!(square_sign(0.0), 1.0);
/// assert_eq!(square_sign(-1.0), -1.0);
/// ```
pub fn square_sign(angle: f64) -> f64 {
    if angle.sin() >= 0.0 { 1.0 } else { -1.0 }
}

#[cfg(test)]
mod tests {
    use super::super::{WaveGenerator, Waveform, generate_wave};
    use super::*;
    use crate::WhiteNoise;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f64::consts::PI;

    #[test]
    fn test_noisy_samples_stay_within_bound() {
        for frequency in [1.0, 2.5, 7.0] {
            let square = generate_wave(Waveform::Square, 300, frequency).unwrap();
            assert!(square.iter().all(|s| (-1.1..=1.1).contains(s)));
        }
    }

    #[test]
    fn test_noise_free_pattern_matches_sine_sign() {
        let noise = WhiteNoise::with_rng(0.1, StdRng::seed_from_u64(5));
        let mut generator = WaveGenerator::with_noise(noise);
        let length = 90;
        let frequency = 3.0;
        let square = generator.generate(Waveform::Square, length, frequency).unwrap();

        for (i, sample) in square.iter().enumerate() {
            let angle = 2.0 * PI * frequency * i as f64 / length as f64;
            let expected = square_sign(angle);
            assert!(
                (sample - expected).abs() <= 0.1 + 1e-12,
                "sample {i}: {sample} vs {expected}"
            );
        }
    }

    #[test]
    fn test_noise_differs_between_calls() {
        let a = generate_wave(Waveform::Square, 64, 1.0).unwrap();
        let b = generate_wave(Waveform::Square, 64, 1.0).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_sign_convention() {
        assert_eq!(square_sign(0.0), 1.0);
        assert_eq!(square_sign(PI / 2.0), 1.0);
        assert_eq!(square_sign(3.0 * PI / 2.0), -1.0);
    }
}
