//! Magnitude spectrum via a direct discrete Fourier transform.

use crate::error::{Result, ScopeError};
use std::f64::consts::PI;

/// Computes the lower half of the DFT magnitude spectrum of `samples`.
///
/// For a buffer of length `N`, bin `k` is
/// `sqrt(re(k)^2 + im(k)^2) / N` where
/// `re(k) = Σ x[t]·cos(2πtk/N)` and `im(k) = -Σ x[t]·sin(2πtk/N)`.
/// Only bins `0..N/2` (rounded down) are returned, with bin 0 holding the DC
/// component. A single-sample buffer therefore yields an empty spectrum.
///
/// This is the naive O(N²) summation; no windowing or zero-padding is applied.
///
/// # Errors
///
/// Returns [`ScopeError::EmptyInput`] if `samples` is empty.
///
/// # Examples
///
/// ```
/// use wavescope::compute_spectrum;
///
/// let spectrum = compute_spectrum(&[1.0, 1.0, 1.0, 1.0]).unwrap();
/// assert_eq!(spectrum.len(), 2);
/// assert!((spectrum[0] - 1.0).abs() < 1e-12);
/// ```
pub fn compute_spectrum(samples: &[f64]) -> Result<Vec<f64>> {
    if samples.is_empty() {
        return Err(ScopeError::EmptyInput {
            operation: "compute_spectrum",
        });
    }

    let n = samples.len();
    let bins = n / 2;
    let spectrum = (0..bins)
        .map(|k| {
            let mut real = 0.0;
            let mut imag = 0.0;
            for (t, &x) in samples.iter().enumerate() {
                let angle = (2.0 * PI * t as f64 * k as f64) / n as f64;
                real += x * angle.cos();
                imag -= x * angle.sin();
            }
            (real * real + imag * imag).sqrt() / n as f64
        })
        .collect();

    Ok(spectrum)
}

/// Index of the largest magnitude, or `None` for an empty spectrum.
pub fn peak_bin(spectrum: &[f64]) -> Option<usize> {
    spectrum
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(bin, _)| bin)
}
