//! Fixed-interval tick driver feeding the rolling windows.

use super::config::DashboardConfig;
use super::frame::{Channel, Frame, Trace};
use crate::analysis::{compute_metrics, compute_spectrum};
use crate::error::Result;
use crate::noise::WhiteNoise;
use crate::oscillators::{WaveGenerator, Waveform};
use crate::window::RollingWindow;
use log::{debug, trace, warn};
use rand::Rng;

/// Owns the per-channel windows and advances them once per timer tick.
///
/// Each call to [`tick`](TickDriver::tick) runs synchronously: derive one live
/// sample per waveform, append it to every window whose channel is not frozen,
/// recompute the square-wave spectrum if the square window moved, then build
/// a [`Frame`]. The caller owns the timer and must not call `tick` re-entrantly.
///
/// # Examples
///
/// ```
/// use wavescope::{Channel, DashboardConfig, TickDriver};
///
/// let mut driver = TickDriver::new(DashboardConfig::default()).unwrap();
/// let frame = driver.tick();
/// assert_eq!(frame.tick, 1);
/// assert_eq!(frame.trace(Channel::Spectrum).unwrap().values.len(), 100);
/// ```
pub struct TickDriver<R: Rng = rand::rngs::ThreadRng> {
    config: DashboardConfig,
    generator: WaveGenerator<R>,
    tick: u64,
    sine: RollingWindow,
    square: RollingWindow,
    triangle: RollingWindow,
    spectrum: Vec<f64>,
    frozen: [bool; 4],
}

impl TickDriver<rand::rngs::ThreadRng> {
    /// Creates a driver whose square-wave noise comes from the thread RNG.
    pub fn new(config: DashboardConfig) -> Result<Self> {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> TickDriver<R> {
    /// Creates a driver with an injected RNG for the square-wave noise.
    ///
    /// Windows start full: each is pre-filled with a batch wave of
    /// `window_size` samples at one cycle per window, and the spectrum is
    /// taken from a separately generated batch square wave.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::InvalidArgument`](crate::ScopeError::InvalidArgument)
    /// if the configuration does not validate.
    pub fn with_rng(config: DashboardConfig, rng: R) -> Result<Self> {
        config.validate()?;

        let noise = WhiteNoise::with_rng(config.noise_amplitude, rng);
        let mut generator =
            WaveGenerator::with_noise(noise).with_sawtooth_period(config.sample_count)?;

        let size = config.window_size;
        let sine = prefilled(&mut generator, Waveform::Sine, size)?;
        let square = prefilled(&mut generator, Waveform::Square, size)?;
        let triangle = prefilled(&mut generator, Waveform::Triangle, size)?;
        let spectrum = compute_spectrum(&generator.generate(Waveform::Square, size, 1.0)?)?;

        debug!(
            "tick driver ready: window={} interval={}ms sawtooth={} noise=±{}",
            size, config.update_interval_ms, config.sample_count, config.noise_amplitude
        );

        Ok(Self {
            config,
            generator,
            tick: 0,
            sine,
            square,
            triangle,
            spectrum,
            frozen: [false; 4],
        })
    }

    /// Advances the tick counter by one and returns the updated frame.
    pub fn tick(&mut self) -> Frame {
        self.tick += 1;
        let interval_ms = self.config.update_interval_ms;

        for kind in Waveform::ALL {
            // Drawn before the freeze gate: the noise stream is the same
            // whatever is frozen.
            let sample = self.generator.sample_at(kind, self.tick, interval_ms);
            if self.is_frozen(Channel::from(kind)) {
                continue;
            }
            self.window_mut(kind).append(sample);
            trace!("tick {}: {} <- {:.4}", self.tick, kind, sample);

            if kind == Waveform::Square && !self.is_frozen(Channel::Spectrum) {
                self.refresh_spectrum();
            }
        }

        self.frame()
    }

    /// Builds a frame from the current state without advancing.
    pub fn frame(&self) -> Frame {
        let traces = Channel::ALL
            .iter()
            .map(|&channel| {
                let values = match channel {
                    Channel::Sine => self.sine.to_vec(),
                    Channel::Square => self.square.to_vec(),
                    Channel::Triangle => self.triangle.to_vec(),
                    Channel::Spectrum => self.spectrum.clone(),
                };
                let metrics = compute_metrics(&values)
                    .map_err(|err| {
                        warn!("tick {}: no metrics for {}: {}", self.tick, channel, err)
                    })
                    .ok();
                Trace {
                    channel,
                    values,
                    metrics,
                }
            })
            .collect();

        Frame {
            tick: self.tick,
            traces,
        }
    }

    fn refresh_spectrum(&mut self) {
        match compute_spectrum(&self.square.to_vec()) {
            Ok(spectrum) => self.spectrum = spectrum,
            Err(err) => warn!("tick {}: keeping previous spectrum: {}", self.tick, err),
        }
    }

    fn window_mut(&mut self, kind: Waveform) -> &mut RollingWindow {
        match kind {
            Waveform::Sine => &mut self.sine,
            Waveform::Square => &mut self.square,
            Waveform::Triangle => &mut self.triangle,
        }
    }

    /// The rolling window backing `kind`.
    pub fn window(&self, kind: Waveform) -> &RollingWindow {
        match kind {
            Waveform::Sine => &self.sine,
            Waveform::Square => &self.square,
            Waveform::Triangle => &self.triangle,
        }
    }

    /// Current square-wave magnitude spectrum.
    pub fn spectrum(&self) -> &[f64] {
        &self.spectrum
    }

    /// Number of ticks processed so far.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn is_frozen(&self, channel: Channel) -> bool {
        self.frozen[channel.index()]
    }

    /// Stops or resumes updates of `channel` from the next tick on.
    ///
    /// Resuming the spectrum recomputes it at once from the current square
    /// window, which may have moved while the spectrum was frozen.
    pub fn set_frozen(&mut self, channel: Channel, frozen: bool) {
        let was_frozen = self.frozen[channel.index()];
        if was_frozen != frozen {
            debug!(
                "{} {} at tick {}",
                channel,
                if frozen { "frozen" } else { "resumed" },
                self.tick
            );
        }
        self.frozen[channel.index()] = frozen;

        if channel == Channel::Spectrum && was_frozen && !frozen {
            self.refresh_spectrum();
        }
    }

    /// Flips the freeze state of `channel` and returns the new state.
    pub fn toggle_freeze(&mut self, channel: Channel) -> bool {
        let frozen = !self.is_frozen(channel);
        self.set_frozen(channel, frozen);
        frozen
    }
}

fn prefilled<R: Rng>(
    generator: &mut WaveGenerator<R>,
    kind: Waveform,
    size: usize,
) -> Result<RollingWindow> {
    RollingWindow::from_samples(size, generator.generate(kind, size, 1.0)?)
}
