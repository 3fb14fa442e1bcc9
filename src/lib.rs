//! Wavescope - signal synthesis and analysis for live waveform dashboards
//!
//! This library provides the numerical core behind a timer-driven dashboard:
//! - Waveform generators (sine, noisy square, triangle) in batch and live modes
//! - Fixed-capacity rolling windows backed by a ring buffer
//! - A direct DFT magnitude spectrum and max/min/RMS metrics
//! - A tick driver that ties them together, with per-channel freeze
//! - CSV export of trailing buffer slices

pub mod analysis;
pub mod dashboard;
mod error;
pub mod export;
pub mod noise;
pub mod oscillators;
pub mod signals;
pub mod window;

// Re-export commonly used types at the crate root
pub use analysis::{Metrics, compute_metrics, compute_spectrum, peak_bin};
pub use dashboard::{Channel, DashboardConfig, Frame, TickDriver, Trace};
pub use error::{Result, ScopeError};
pub use noise::WhiteNoise;
pub use oscillators::{WaveGenerator, Waveform, generate_wave, next_sample, square_sign};
pub use signals::Signal;
pub use window::{RollingWindow, append_to_window};
