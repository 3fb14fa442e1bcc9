//! Noise sources used to dirty synthetic signals.

mod white;

pub use white::{DEFAULT_NOISE_AMPLITUDE, WhiteNoise};
