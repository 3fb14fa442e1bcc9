//! Spectral and statistical analysis of sample buffers.

mod metrics;
mod spectrum;

pub use metrics::{Metrics, compute_metrics};
pub use spectrum::{compute_spectrum, peak_bin};
