//! Fixed-capacity rolling window of samples.
//!
//! Stores the most recent `capacity` samples in a ring buffer. Appending to a
//! full window overwrites the oldest sample in place, so every update is O(1).

use crate::error::{Result, ScopeError};

/// A sliding window holding the most recent samples, oldest first.
///
/// # Examples
///
/// ```
/// use wavescope::RollingWindow;
///
/// let mut window = RollingWindow::new(3).unwrap();
/// for sample in [1.0, 2.0, 3.0, 4.0] {
///     window.append(sample);
/// }
/// assert_eq!(window.to_vec(), vec![2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RollingWindow {
    buffer: Vec<f64>,
    /// Index of the oldest sample.
    head: usize,
    len: usize,
}

impl RollingWindow {
    /// Creates an empty window holding at most `capacity` samples.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::InvalidArgument`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(ScopeError::invalid("window capacity must be greater than 0"));
        }
        Ok(Self {
            buffer: vec![0.0; capacity],
            head: 0,
            len: 0,
        })
    }

    /// Creates a window pre-filled from `samples`.
    ///
    /// If more than `capacity` samples are supplied only the most recent
    /// `capacity` are kept.
    pub fn from_samples(capacity: usize, samples: impl IntoIterator<Item = f64>) -> Result<Self> {
        let mut window = Self::new(capacity)?;
        for sample in samples {
            window.append(sample);
        }
        Ok(window)
    }

    /// Appends `sample`, evicting the oldest sample when full.
    pub fn append(&mut self, sample: f64) {
        let capacity = self.buffer.len();
        if self.len < capacity {
            let tail = (self.head + self.len) % capacity;
            self.buffer[tail] = sample;
            self.len += 1;
        } else {
            self.buffer[self.head] = sample;
            self.head = (self.head + 1) % capacity;
        }
    }

    /// Maximum number of samples held.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Number of samples currently held.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.buffer.len()
    }

    /// Most recently appended sample.
    pub fn latest(&self) -> Option<f64> {
        if self.len == 0 {
            return None;
        }
        Some(self.buffer[(self.head + self.len - 1) % self.buffer.len()])
    }

    /// Iterates samples oldest first.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        let capacity = self.buffer.len();
        (0..self.len).map(move |offset| self.buffer[(self.head + offset) % capacity])
    }

    /// Copies the samples into a contiguous vector, oldest first.
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    /// The most recent `count` samples (or all of them), oldest first.
    pub fn tail(&self, count: usize) -> Vec<f64> {
        let skip = self.len.saturating_sub(count);
        self.iter().skip(skip).collect()
    }

    /// Removes every sample, keeping the capacity.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}

/// Appends one sample to `window`, dropping the oldest when at capacity.
pub fn append_to_window(window: &mut RollingWindow, sample: f64) {
    window.append(sample);
}
