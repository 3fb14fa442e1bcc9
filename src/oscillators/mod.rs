//! Periodic waveform generators.
//!
//! Every waveform can be produced in two modes:
//! - **batch**: a whole buffer of `length` samples where sample `i` sits at
//!   phase `frequency * i / length` cycles (see [`WaveGenerator::generate`]);
//! - **live**: exactly one sample for an absolute tick counter, where the phase
//!   advances one full cycle per second of wall-clock time
//!   (see [`WaveGenerator::sample_at`]).
//!
//! The two phase formulas are not numerically equivalent for the same nominal
//! frequency. Rolling windows are fed exclusively by the live mode; the batch
//! mode is used to pre-fill them and for one-shot analysis.

mod sine;
mod square;
mod triangle;

use crate::error::{Result, ScopeError};
use crate::noise::{DEFAULT_NOISE_AMPLITUDE, WhiteNoise};
use crate::Signal;
use rand::Rng;
use std::f64::consts::PI;
use std::fmt;

pub use square::square_sign;

/// Default period, in ticks, of the live triangle ramp.
pub const DEFAULT_SAWTOOTH_PERIOD: u64 = 256;

/// The synthetic signals a dashboard can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Waveform {
    /// Pure sine.
    Sine,
    /// Square wave with additive uniform noise.
    Square,
    /// Triangle wave (a rising ramp in live mode).
    Triangle,
}

impl Waveform {
    /// All waveforms in display order.
    pub const ALL: [Waveform; 3] = [Waveform::Sine, Waveform::Square, Waveform::Triangle];

    /// Human-readable name, as shown in chart titles.
    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "Sine Wave",
            Waveform::Square => "Square Wave",
            Waveform::Triangle => "Triangle Wave",
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Phase angle in radians of sample `index` in a batch of `length` samples.
fn batch_angle(frequency: f64, index: usize, length: usize) -> f64 {
    2.0 * PI * frequency * index as f64 / length as f64
}

/// Phase angle in radians after `tick` ticks of `interval_ms` each.
///
/// One full cycle per elapsed second.
fn live_angle(tick: u64, interval_ms: u64) -> f64 {
    let seconds = (tick as f64 * interval_ms as f64) / 1000.0;
    seconds * 2.0 * PI
}

fn validate_batch(length: usize, frequency: f64) -> Result<()> {
    if length == 0 {
        return Err(ScopeError::invalid("wave length must be greater than 0"));
    }
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(ScopeError::invalid(format!(
            "frequency multiplier must be a positive finite number, got {frequency}"
        )));
    }
    Ok(())
}

/// Generates batch and live samples for every [`Waveform`].
///
/// The generator owns the noise source mixed into the square wave, so a
/// seeded RNG can be injected for reproducible output.
pub struct WaveGenerator<R: Rng = rand::rngs::ThreadRng> {
    noise: WhiteNoise<R>,
    sawtooth_period: u64,
}

impl WaveGenerator<rand::rngs::ThreadRng> {
    /// Creates a generator with default noise (±0.1) from the thread RNG.
    pub fn new() -> Self {
        Self::with_noise(WhiteNoise::new(DEFAULT_NOISE_AMPLITUDE))
    }
}

impl Default for WaveGenerator<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> WaveGenerator<R> {
    /// Creates a generator around an existing noise source.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use wavescope::{WaveGenerator, Waveform, WhiteNoise};
    ///
    /// let noise = WhiteNoise::with_rng(0.1, rand::rngs::StdRng::seed_from_u64(1));
    /// let mut generator = WaveGenerator::with_noise(noise);
    /// let square = generator.generate(Waveform::Square, 64, 2.0).unwrap();
    /// assert_eq!(square.len(), 64);
    /// ```
    pub fn with_noise(noise: WhiteNoise<R>) -> Self {
        Self {
            noise,
            sawtooth_period: DEFAULT_SAWTOOTH_PERIOD,
        }
    }

    /// Sets the live triangle period in ticks.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::InvalidArgument`] if `period` is zero.
    pub fn with_sawtooth_period(mut self, period: u64) -> Result<Self> {
        if period == 0 {
            return Err(ScopeError::invalid("sawtooth period must be greater than 0"));
        }
        self.sawtooth_period = period;
        Ok(self)
    }

    /// Live triangle period in ticks.
    pub fn sawtooth_period(&self) -> u64 {
        self.sawtooth_period
    }

    /// Peak amplitude of the noise added to square samples.
    pub fn noise_amplitude(&self) -> f64 {
        self.noise.amplitude()
    }

    /// Produces `length` samples of `kind` at `frequency` cycles per buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::InvalidArgument`] if `length` is zero or
    /// `frequency` is not a positive finite number.
    pub fn generate(&mut self, kind: Waveform, length: usize, frequency: f64) -> Result<Vec<f64>> {
        validate_batch(length, frequency)?;

        let samples = match kind {
            Waveform::Sine => (0..length)
                .map(|i| sine::at_angle(batch_angle(frequency, i, length)))
                .collect(),
            Waveform::Square => {
                let mut samples: Vec<f64> = (0..length)
                    .map(|i| square_sign(batch_angle(frequency, i, length)))
                    .collect();
                for sample in samples.iter_mut() {
                    *sample += self.noise.next_sample();
                }
                samples
            }
            Waveform::Triangle => (0..length)
                .map(|i| triangle::batch(frequency, i, length))
                .collect(),
        };

        Ok(samples)
    }

    /// Produces the single live sample of `kind` for the given tick.
    ///
    /// The square sample includes a fresh noise draw. The triangle sample is a
    /// ramp from -1 towards +1 repeating every `sawtooth_period` ticks and is
    /// independent of `interval_ms`.
    pub fn sample_at(&mut self, kind: Waveform, tick: u64, interval_ms: u64) -> f64 {
        match kind {
            Waveform::Sine => sine::at_angle(live_angle(tick, interval_ms)),
            Waveform::Square => {
                square_sign(live_angle(tick, interval_ms)) + self.noise.next_sample()
            }
            Waveform::Triangle => triangle::live(tick, self.sawtooth_period),
        }
    }
}

/// Generates a full buffer of `kind` using thread-RNG noise.
///
/// # Examples
///
/// ```
/// use wavescope::{generate_wave, Waveform};
///
/// let sine = generate_wave(Waveform::Sine, 8, 1.0).unwrap();
/// assert_eq!(sine.len(), 8);
/// assert_eq!(sine[0], 0.0);
/// ```
pub fn generate_wave(kind: Waveform, length: usize, frequency: f64) -> Result<Vec<f64>> {
    WaveGenerator::new().generate(kind, length, frequency)
}

/// Produces one live sample of `kind` for `tick` using thread-RNG noise.
pub fn next_sample(kind: Waveform, tick: u64, interval_ms: u64) -> f64 {
    WaveGenerator::new().sample_at(kind, tick, interval_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(amplitude: f64) -> WaveGenerator<StdRng> {
        WaveGenerator::with_noise(WhiteNoise::with_rng(amplitude, StdRng::seed_from_u64(99)))
    }

    #[test]
    fn test_zero_length_is_rejected() {
        for kind in Waveform::ALL {
            let err = generate_wave(kind, 0, 1.0).unwrap_err();
            assert!(matches!(err, ScopeError::InvalidArgument { .. }));
        }
    }

    #[test]
    fn test_bad_frequency_is_rejected() {
        for frequency in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = generate_wave(Waveform::Triangle, 16, frequency).unwrap_err();
            assert!(matches!(err, ScopeError::InvalidArgument { .. }));
        }
    }

    #[test]
    fn test_generate_lengths() {
        let mut generator = seeded(0.1);
        for kind in Waveform::ALL {
            for length in [1, 2, 7, 200] {
                assert_eq!(generator.generate(kind, length, 1.0).unwrap().len(), length);
            }
        }
    }

    #[test]
    fn test_noise_free_square_is_exact_sign() {
        let mut generator = seeded(0.0);
        let square = generator.generate(Waveform::Square, 8, 1.0).unwrap();
        assert_eq!(square, vec![1.0, 1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_live_sine_completes_one_cycle_per_second() {
        let mut generator = seeded(0.0);
        // 25 ticks * 10 ms = quarter second
        assert_abs_diff_eq!(generator.sample_at(Waveform::Sine, 25, 10), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(generator.sample_at(Waveform::Sine, 75, 10), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            generator.sample_at(Waveform::Sine, 100, 10),
            generator.sample_at(Waveform::Sine, 0, 10),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_live_square_follows_sine_sign() {
        let mut generator = seeded(0.0);
        assert_eq!(generator.sample_at(Waveform::Square, 0, 10), 1.0);
        assert_eq!(generator.sample_at(Waveform::Square, 25, 10), 1.0);
        assert_eq!(generator.sample_at(Waveform::Square, 60, 10), -1.0);
    }

    #[test]
    fn test_live_square_noise_bound() {
        let mut generator = seeded(0.1);
        for tick in 0..500 {
            let sample = generator.sample_at(Waveform::Square, tick, 10);
            let base = if sample > 0.0 { 1.0 } else { -1.0 };
            assert!((sample - base).abs() <= 0.1 + 1e-12);
        }
    }

    #[test]
    fn test_live_triangle_ignores_interval() {
        let mut generator = seeded(0.0);
        assert_eq!(
            generator.sample_at(Waveform::Triangle, 64, 10),
            generator.sample_at(Waveform::Triangle, 64, 1000)
        );
    }

    #[test]
    fn test_sawtooth_period_validation() {
        assert!(seeded(0.0).with_sawtooth_period(0).is_err());
        let generator = seeded(0.0).with_sawtooth_period(100).unwrap();
        assert_eq!(generator.sawtooth_period(), 100);
    }

    #[test]
    fn test_names() {
        assert_eq!(Waveform::Square.to_string(), "Square Wave");
        assert_eq!(Waveform::ALL.len(), 3);
    }
}
