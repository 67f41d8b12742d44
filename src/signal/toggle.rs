//! Edge-triggered boolean latch.

use crate::signal::edge::Edge;

/// Flips a boolean latch whenever it observes the configured trigger edge.
///
/// Feed it the output of an [`EdgeDetector`](crate::signal::EdgeDetector)
/// once per tick. Only `Rising` or `Falling` make sense as triggers.
#[derive(Debug, Clone)]
pub struct EdgeToggle {
    state: bool,
    trigger: Edge,
}

impl Default for EdgeToggle {
    /// Off, toggling on `Falling` — the trainer's release-to-act convention.
    fn default() -> Self {
        Self::new(false, Edge::Falling)
    }
}

impl EdgeToggle {
    pub fn new(initial_state: bool, trigger: Edge) -> Self {
        Self {
            state: initial_state,
            trigger,
        }
    }

    /// Flips the latch iff `edge` matches the configured trigger.
    /// Every other value, including repeated `Edge::None`, is ignored.
    pub fn update(&mut self, edge: Edge) {
        if edge == self.trigger {
            self.state = !self.state;
        }
    }

    /// Unconditional override, bypassing edge logic. Used for interlocks.
    pub fn set_state(&mut self, state: bool) {
        self.state = state;
    }

    pub fn state(&self) -> bool {
        self.state
    }
}
