//! Outbound dashboard events.
//!
//! The [`LightController`](crate::control::lights::LightController) emits
//! these through the [`EventSink`](super::ports::EventSink) port whenever a
//! signal changes state. Adapters on the other side decide what to do with
//! them — the simulator logs them to the console.

use crate::app::ports::{LampCommands, SwitchSnapshot};

/// One side of the turn-signal pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnSide {
    Left,
    Right,
}

/// One of the two headlight circuits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Beam {
    Dipped,
    High,
}

/// Why an active turn blinker was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelCause {
    /// Its own stalk switch was actuated again.
    Stalk,
    /// The opposite side was engaged; only one side blinks at a time.
    OppositeSide,
    /// The brake was applied.
    Brake,
}

/// Structured events emitted by the light controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    /// A turn blinker started running.
    BlinkerEngaged { side: TurnSide },

    /// A running turn blinker was stopped.
    BlinkerCancelled { side: TurnSide, cause: CancelCause },

    /// A beam toggle changed state through its own switch.
    BeamToggled { beam: Beam, on: bool },

    /// A beam toggle was forced by the headlight interlock
    /// (high beam requires dipped beam).
    InterlockForced { beam: Beam, on: bool },

    /// Periodic dashboard snapshot.
    Status(DashboardStatus),
}

/// A point-in-time dashboard snapshot suitable for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStatus {
    pub switches: SwitchSnapshot,
    pub lamps: LampCommands,
}
