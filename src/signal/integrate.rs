//! Bounded trapezoidal integration of a sampled rate signal.
//!
//! Accumulates a signed rate into a position in value-units × milliseconds
//! using the trapezoidal rule: each interval contributes the average of its
//! two endpoint samples times the elapsed milliseconds. All arithmetic is
//! integer — the accumulator is kept at ×[`SCALE`](Integrator::SCALE) so an
//! odd `(rate + last_rate) · Δt` term keeps its half-unit instead of losing
//! it to truncation on every interval.
//!
//! The primitive never clamps itself: callers that want bounded behaviour
//! invoke [`coerce`](Integrator::coerce) after each update.

/// Trapezoidal integrator over a `u32` millisecond clock.
#[derive(Debug, Clone)]
pub struct Integrator {
    scaled: i64,
    last_ms: u32,
    last_rate: i32,
}

impl Integrator {
    /// Accumulator scale. At 1, integrating a rate of 1 over 1 ms would
    /// round to zero; keeping state at ×2 preserves the half-unit.
    pub const SCALE: i64 = 2;

    /// Zeroed integrator; the first interval starts at `now_ms`.
    pub fn new(now_ms: u32) -> Self {
        Self::with_initial(now_ms, 0)
    }

    /// Zeroed integrator with a seeded previous sample for the first
    /// trapezoid.
    pub fn with_initial(now_ms: u32, rate: i32) -> Self {
        Self {
            scaled: 0,
            last_ms: now_ms,
            last_rate: rate,
        }
    }

    /// Add the trapezoid between the previous sample and (`now_ms`, `rate`).
    ///
    /// Two calls inside the same millisecond are a no-op: a zero-length
    /// interval must not overwrite the previous sample without contributing
    /// area.
    pub fn update(&mut self, now_ms: u32, rate: i32) {
        if now_ms == self.last_ms {
            return;
        }
        let delta = i64::from(now_ms.wrapping_sub(self.last_ms));
        let sum = i64::from(rate) + i64::from(self.last_rate);
        self.scaled += Self::SCALE * sum * delta / 2;
        self.last_ms = now_ms;
        self.last_rate = rate;
    }

    /// Clamp the accumulator into `[lower, upper]` (in value-units × ms).
    /// Idempotent; the upper bound is applied first, so contradictory
    /// bounds resolve to `lower`.
    pub fn coerce(&mut self, lower: i64, upper: i64) {
        let hi = upper.saturating_mul(Self::SCALE);
        let lo = lower.saturating_mul(Self::SCALE);
        if self.scaled > hi {
            self.scaled = hi;
        }
        if self.scaled < lo {
            self.scaled = lo;
        }
    }

    /// The integral in value-units × milliseconds. Integer division drops
    /// the scale's half-unit remainder.
    pub fn state(&self) -> i64 {
        self.scaled / Self::SCALE
    }
}
