//! Triangle waveform.

/// Batch triangle sample `index` of `length` at `frequency` cycles per buffer.
///
/// Rises from -1 over the first half period and falls back over the second;
/// the position `t = 0.5` already takes the falling branch.
pub(super) fn batch(frequency: f64, index: usize, length: usize) -> f64 {
    let period = length as f64 / frequency;
    let t = (index as f64 % period) / period;
    if t < 0.5 { 4.0 * t - 1.0 } else { -4.0 * t + 3.0 }
}

/// Live ramp sample: `(tick mod period) / period` mapped onto `[-1, 1)`.
pub(super) fn live(tick: u64, period: u64) -> f64 {
    ((tick % period) as f64 / period as f64) * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::super::{Waveform, generate_wave};
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_starts_at_minus_one() {
        let triangle = generate_wave(Waveform::Triangle, 200, 1.0).unwrap();
        assert_eq!(triangle[0], -1.0);
    }

    #[test]
    fn test_half_period_boundary() {
        // t == 0.5 evaluates the falling branch: -4 * 0.5 + 3
        let triangle = generate_wave(Waveform::Triangle, 200, 1.0).unwrap();
        assert_eq!(triangle[100], 1.0);
        assert_eq!(batch(1.0, 100, 200), -4.0 * 0.5 + 3.0);
    }

    #[test]
    fn test_linear_ramps() {
        let triangle = generate_wave(Waveform::Triangle, 200, 1.0).unwrap();
        assert_abs_diff_eq!(triangle[50], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(triangle[150], 0.0, epsilon = 1e-12);
        let rising = triangle[2] - triangle[1];
        let falling = triangle[152] - triangle[151];
        assert_abs_diff_eq!(rising, 0.02, epsilon = 1e-12);
        assert_abs_diff_eq!(falling, -0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_range() {
        for frequency in [0.5, 1.0, 3.0] {
            let triangle = generate_wave(Waveform::Triangle, 97, frequency).unwrap();
            assert!(triangle.iter().all(|s| (-1.0..=1.0).contains(s)));
        }
    }

    #[test]
    fn test_live_ramp_wraps() {
        assert_eq!(live(0, 256), -1.0);
        assert_eq!(live(128, 256), 0.0);
        assert_eq!(live(256, 256), -1.0);
        assert_abs_diff_eq!(live(255, 256), 1.0 - 2.0 / 256.0, epsilon = 1e-12);
    }
}
