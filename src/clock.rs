//! Host time source.
//!
//! Wraps [`std::time::Instant`] and reports elapsed milliseconds as `u32`,
//! the same width the control loop does all its time arithmetic in. The
//! truncation *is* the wraparound: after ~49.7 days the counter rolls
//! over, which the `wrapping_sub` comparisons downstream handle.

use std::time::Instant;

/// Monotonic millisecond counter, anchored at construction.
pub struct MonotonicClock {
    start: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Milliseconds since the clock was created, wrapping at `u32::MAX`.
    pub fn now_ms(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }
}
