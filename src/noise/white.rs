//! Uniform white noise source.

use crate::Signal;
use rand::Rng;

/// Peak noise amplitude added to the square wave (10% of unit amplitude).
pub const DEFAULT_NOISE_AMPLITUDE: f64 = 0.1;

/// A uniform white noise source.
///
/// Each sample is drawn independently and uniformly from
/// `[-amplitude, +amplitude]`. The random number generator is a type
/// parameter so tests can inject a seeded one.
pub struct WhiteNoise<R: Rng = rand::rngs::ThreadRng> {
    amplitude: f64,
    rng: R,
}

impl WhiteNoise<rand::rngs::ThreadRng> {
    /// Creates a noise source backed by the thread-local RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavescope::{Signal, WhiteNoise};
    ///
    /// let mut noise = WhiteNoise::new(0.1);
    /// let sample = noise.next_sample();
    /// assert!((-0.1..=0.1).contains(&sample));
    /// ```
    pub fn new(amplitude: f64) -> Self {
        Self::with_rng(amplitude, rand::thread_rng())
    }
}

impl<R: Rng> WhiteNoise<R> {
    /// Creates a noise source with a caller-supplied RNG.
    ///
    /// Negative or non-finite amplitudes are treated as zero (silence).
    ///
    /// # Examples
    ///
    /// ```
    /// use wavescope::{Signal, WhiteNoise};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = WhiteNoise::with_rng(0.1, rng);
    /// let sample = noise.next_sample();
    /// ```
    pub fn with_rng(amplitude: f64, rng: R) -> Self {
        let amplitude = if amplitude.is_finite() {
            amplitude.max(0.0)
        } else {
            0.0
        };
        Self { amplitude, rng }
    }

    /// Peak absolute value of generated samples.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

impl<R: Rng> Signal for WhiteNoise<R> {
    fn next_sample(&mut self) -> f64 {
        if self.amplitude == 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-self.amplitude..=self.amplitude)
    }
}
