//! Start/stop-gated square-wave generator.
//!
//! Produces the turn-signal waveform: while running, the output is held
//! true for `on_ms`, false for `off_ms`, repeating. The phase anchor
//! advances by *exactly* the expired phase's duration on every boundary —
//! never reset to "now" — so irregular polling cannot accumulate drift:
//!
//! ```text
//! start(t0)
//!   │◀── on_ms ──▶│◀── off_ms ──▶│◀── on_ms ──▶│
//!   ┌─────────────┐              ┌─────────────┐
//! ──┘             └──────────────┘             └──
//!   t0         t0+on        t0+on+off      t0+2·on+off
//! ```
//!
//! A poll that arrives late still flips at the *nominal* boundary above,
//! not at the time of the poll.

/// Free-running square wave with independently configured phase durations.
#[derive(Debug, Clone)]
pub struct BlinkGenerator {
    enabled: bool,
    state: bool,
    on_ms: u32,
    off_ms: u32,
    phase_start_ms: u32,
}

impl BlinkGenerator {
    /// Symmetric duty cycle: `on = period / 2`, `off = period - on`.
    /// An odd period biases toward the shorter on-phase.
    pub fn new(period_ms: u32) -> Self {
        let on_ms = period_ms / 2;
        Self::with_phases(on_ms, period_ms - on_ms)
    }

    /// Explicit on/off phase durations. Starts disabled, output false.
    pub fn with_phases(on_ms: u32, off_ms: u32) -> Self {
        Self {
            enabled: false,
            state: false,
            on_ms,
            off_ms,
            phase_start_ms: 0,
        }
    }

    /// Enables blinking: phase clock restarts at `now_ms`, output goes true.
    pub fn start(&mut self, now_ms: u32) {
        self.start_with(now_ms, true);
    }

    /// [`start`](Self::start) with an explicit initial output value.
    pub fn start_with(&mut self, now_ms: u32, initial: bool) {
        self.enabled = true;
        self.state = initial;
        self.phase_start_ms = now_ms;
    }

    /// Disables blinking and forces the output false. Idempotent.
    pub fn stop(&mut self) {
        self.enabled = false;
        self.state = false;
    }

    /// `false` behaves as [`stop`](Self::stop). `true` starts blinking only
    /// when not already running — re-asserting "on" must not restart the
    /// waveform mid-phase.
    pub fn set_blinking(&mut self, blinking: bool, now_ms: u32) {
        if !blinking {
            self.stop();
        } else if !self.enabled {
            self.start(now_ms);
        }
    }

    /// Advance the waveform to `now_ms`. No-op while stopped.
    ///
    /// The off-phase check runs after the on-phase check, so one late call
    /// can cross an on→off and the following off→on boundary back to back.
    pub fn update(&mut self, now_ms: u32) {
        if !self.enabled {
            return;
        }
        if self.state && now_ms.wrapping_sub(self.phase_start_ms) >= self.on_ms {
            self.state = false;
            self.phase_start_ms = self.phase_start_ms.wrapping_add(self.on_ms);
        }
        if !self.state && now_ms.wrapping_sub(self.phase_start_ms) >= self.off_ms {
            self.state = true;
            self.phase_start_ms = self.phase_start_ms.wrapping_add(self.off_ms);
        }
    }

    pub fn state(&self) -> bool {
        self.state
    }

    pub fn is_blinking(&self) -> bool {
        self.enabled
    }
}
