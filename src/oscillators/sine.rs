//! Sine waveform.

/// Sine sample at `angle` radians.
pub(super) fn at_angle(angle: f64) -> f64 {
    angle.sin()
}
