//! Summary statistics of a sample buffer.

use crate::error::{Result, ScopeError};
use serde::Serialize;

/// Max, min and RMS of a buffer at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub max: f64,
    pub min: f64,
    /// Root mean square: `sqrt(mean(x²))`.
    pub rms: f64,
}

/// Computes [`Metrics`] over `samples`.
///
/// # Errors
///
/// Returns [`ScopeError::EmptyInput`] for an empty buffer; there is no
/// meaningful maximum of an empty set.
///
/// # Examples
///
/// ```
/// use wavescope::compute_metrics;
///
/// let metrics = compute_metrics(&[1.0, -1.0, 0.5]).unwrap();
/// assert_eq!(metrics.max, 1.0);
/// assert_eq!(metrics.min, -1.0);
/// assert!((metrics.rms - 0.9129).abs() < 1e-4);
/// ```
pub fn compute_metrics(samples: &[f64]) -> Result<Metrics> {
    if samples.is_empty() {
        return Err(ScopeError::EmptyInput {
            operation: "compute_metrics",
        });
    }

    let (max, min, sum_squares) = samples.iter().fold(
        (f64::NEG_INFINITY, f64::INFINITY, 0.0),
        |(max, min, sum), &x| (max.max(x), min.min(x), sum + x * x),
    );
    let rms = (sum_squares / samples.len() as f64).sqrt();

    Ok(Metrics { max, min, rms })
}
