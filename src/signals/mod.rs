//! Sample-source abstraction, implemented by the noise source.

mod signal;

pub use signal::Signal;
