//! Dashboard configuration.

use crate::error::{Result, ScopeError};
use crate::noise::DEFAULT_NOISE_AMPLITUDE;
use crate::oscillators::DEFAULT_SAWTOOTH_PERIOD;
use serde::{Deserialize, Serialize};

/// Tunables of a live dashboard.
///
/// Missing fields fall back to their defaults when deserializing.
///
/// # Examples
///
/// ```
/// use wavescope::DashboardConfig;
///
/// let config = DashboardConfig::from_json(r#"{ "window_size": 64 }"#).unwrap();
/// assert_eq!(config.window_size, 64);
/// assert_eq!(config.update_interval_ms, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Capacity of each rolling window.
    pub window_size: usize,
    /// Period, in ticks, of the live triangle ramp.
    pub sample_count: u64,
    /// Timer interval between ticks.
    pub update_interval_ms: u64,
    /// Samples per second assumed when mapping indices to time and when
    /// sizing exports.
    pub sampling_rate_hz: u32,
    /// Peak amplitude of the noise added to the square wave.
    pub noise_amplitude: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_size: 200,
            sample_count: DEFAULT_SAWTOOTH_PERIOD,
            update_interval_ms: 10,
            sampling_rate_hz: 100,
            noise_amplitude: DEFAULT_NOISE_AMPLITUDE,
        }
    }
}

impl DashboardConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DashboardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Whole ticks per second of wall-clock time, at least 1.
    ///
    /// Intervals longer than a second still count as one tick per second so
    /// callers can use the result as a divisor.
    pub fn ticks_per_second(&self) -> u64 {
        (1000 / self.update_interval_ms.max(1)).max(1)
    }

    /// Checks every field is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::InvalidArgument`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(ScopeError::invalid("window_size must be greater than 0"));
        }
        if self.sample_count == 0 {
            return Err(ScopeError::invalid("sample_count must be greater than 0"));
        }
        if self.update_interval_ms == 0 {
            return Err(ScopeError::invalid(
                "update_interval_ms must be greater than 0",
            ));
        }
        if self.sampling_rate_hz == 0 {
            return Err(ScopeError::invalid(
                "sampling_rate_hz must be greater than 0",
            ));
        }
        if !self.noise_amplitude.is_finite() || self.noise_amplitude < 0.0 {
            return Err(ScopeError::invalid(format!(
                "noise_amplitude must be finite and non-negative, got {}",
                self.noise_amplitude
            )));
        }
        Ok(())
    }
}
