//! Snapshot of every displayed trace after one tick.

use crate::analysis::Metrics;
use crate::oscillators::Waveform;
use serde::Serialize;
use std::fmt;

/// A displayed trace: one of the waveforms or the square-wave spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Channel {
    Sine,
    Square,
    Triangle,
    /// Magnitude spectrum of the square window.
    Spectrum,
}

impl Channel {
    /// All channels in display order.
    pub const ALL: [Channel; 4] = [
        Channel::Sine,
        Channel::Square,
        Channel::Triangle,
        Channel::Spectrum,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Channel::Sine => 0,
            Channel::Square => 1,
            Channel::Triangle => 2,
            Channel::Spectrum => 3,
        }
    }

    /// Chart title for this channel.
    pub fn title(self) -> &'static str {
        match self {
            Channel::Sine => Waveform::Sine.name(),
            Channel::Square => Waveform::Square.name(),
            Channel::Triangle => Waveform::Triangle.name(),
            Channel::Spectrum => "Square Wave FFT",
        }
    }

    /// Whether the trace is indexed by frequency bin rather than time.
    pub fn is_spectrum(self) -> bool {
        self == Channel::Spectrum
    }
}

impl From<Waveform> for Channel {
    fn from(kind: Waveform) -> Self {
        match kind {
            Waveform::Sine => Channel::Sine,
            Waveform::Square => Channel::Square,
            Waveform::Triangle => Channel::Triangle,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Values of one channel plus their metrics.
///
/// `metrics` is `None` only when `values` is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub channel: Channel,
    pub values: Vec<f64>,
    pub metrics: Option<Metrics>,
}

impl Trace {
    /// Horizontal coordinates for plotting `values`.
    ///
    /// Time-domain traces end at 0 s and extend into the past:
    /// `-(len - i) / sampling_rate_hz`. The spectrum uses the bin index.
    pub fn x_axis(&self, sampling_rate_hz: u32) -> Vec<f64> {
        let len = self.values.len();
        if self.channel.is_spectrum() {
            return (0..len).map(|bin| bin as f64).collect();
        }
        let rate = f64::from(sampling_rate_hz.max(1));
        (0..len).map(|i| -((len - i) as f64) / rate).collect()
    }
}

/// Everything a renderer needs after a tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Tick counter value this frame was produced at.
    pub tick: u64,
    pub traces: Vec<Trace>,
}

impl Frame {
    /// The trace for `channel`.
    pub fn trace(&self, channel: Channel) -> Option<&Trace> {
        self.traces.iter().find(|trace| trace.channel == channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(channel: Channel, len: usize) -> Trace {
        Trace {
            channel,
            values: vec![0.0; len],
            metrics: None,
        }
    }

    #[test]
    fn test_time_axis_ends_just_before_zero() {
        let axis = trace(Channel::Sine, 4).x_axis(100);
        assert_eq!(axis, vec![-0.04, -0.03, -0.02, -0.01]);
    }

    #[test]
    fn test_spectrum_axis_is_bin_index() {
        let axis = trace(Channel::Spectrum, 3).x_axis(100);
        assert_eq!(axis, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_titles() {
        assert_eq!(Channel::Spectrum.to_string(), "Square Wave FFT");
        assert_eq!(Channel::from(Waveform::Triangle).title(), "Triangle Wave");
    }

    #[test]
    fn test_frame_lookup() {
        let frame = Frame {
            tick: 3,
            traces: vec![trace(Channel::Sine, 1), trace(Channel::Spectrum, 0)],
        };
        assert!(frame.trace(Channel::Spectrum).is_some());
        assert!(frame.trace(Channel::Square).is_none());
    }
}
