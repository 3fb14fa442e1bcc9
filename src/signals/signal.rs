//! Core sample-source trait.

/// Common interface for anything that produces a stream of samples.
///
/// Two operations are provided:
/// - Single sample generation via `next_sample()`
/// - Batch generation via `process()`
pub trait Signal {
    /// Generates the next sample from the source.
    fn next_sample(&mut self) -> f64;

    /// Fills `buffer` with consecutive samples.
    ///
    /// Default implementation calls `next_sample()` for each element.
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}
