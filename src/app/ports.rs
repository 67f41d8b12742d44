//! Port traits — the boundary between the light controller and the shield.
//!
//! ```text
//!   SwitchPort ──▶ ┌──────────────────┐ ──▶ EventSink
//!                  │  LightController │
//!     LampPort ◀── └──────────────────┘
//! ```
//!
//! Adapters (the in-memory simulator shield, the embedded-hal bridge, a
//! recording mock in tests) implement these traits; the controller consumes
//! them via generics and never touches hardware directly. All operations
//! are total: a port returns plain levels and accepts plain commands, with
//! no error channel — whatever policy a real pin failure needs lives inside
//! the adapter.

use crate::app::events::DashboardEvent;
use crate::channels::{Lamp, Switch};

// ───────────────────────────────────────────────────────────────
// Switch port (shield → controller)
// ───────────────────────────────────────────────────────────────

/// Read-side port: raw boolean switch levels.
///
/// Levels are raw, not logical: the trainer's pull-up wiring means idle
/// reads `true` and pressed reads `false`, and the controller's rules are
/// written against exactly those levels.
pub trait SwitchPort {
    /// Current raw level of one switch.
    fn read_switch(&mut self, switch: Switch) -> bool;

    /// Read every switch once, in channel order.
    fn read_all(&mut self) -> SwitchSnapshot {
        SwitchSnapshot {
            turn_left: self.read_switch(Switch::TurnLeft),
            turn_right: self.read_switch(Switch::TurnRight),
            stop: self.read_switch(Switch::Stop),
            dipped_beam: self.read_switch(Switch::DippedBeam),
            high_beam: self.read_switch(Switch::HighBeam),
            accelerate: self.read_switch(Switch::Accelerate),
            decelerate: self.read_switch(Switch::Decelerate),
        }
    }
}

/// A point-in-time capture of every switch level, taken once at the top of
/// each tick so every rule in the tick sees the same inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchSnapshot {
    pub turn_left: bool,
    pub turn_right: bool,
    pub stop: bool,
    pub dipped_beam: bool,
    pub high_beam: bool,
    pub accelerate: bool,
    pub decelerate: bool,
}

impl SwitchSnapshot {
    /// Every switch idle (pull-up high).
    pub fn idle() -> Self {
        Self {
            turn_left: true,
            turn_right: true,
            stop: true,
            dipped_beam: true,
            high_beam: true,
            accelerate: true,
            decelerate: true,
        }
    }

    pub fn level(&self, switch: Switch) -> bool {
        match switch {
            Switch::TurnLeft => self.turn_left,
            Switch::TurnRight => self.turn_right,
            Switch::Stop => self.stop,
            Switch::DippedBeam => self.dipped_beam,
            Switch::HighBeam => self.high_beam,
            Switch::Accelerate => self.accelerate,
            Switch::Decelerate => self.decelerate,
        }
    }
}

impl Default for SwitchSnapshot {
    fn default() -> Self {
        Self::idle()
    }
}

// ───────────────────────────────────────────────────────────────
// Lamp port (controller → shield)
// ───────────────────────────────────────────────────────────────

/// Write-side port: boolean lamps plus the speed-indicator PWM channel.
pub trait LampPort {
    fn set_lamp(&mut self, lamp: Lamp, on: bool);

    /// Speed-indicator intensity, 0 (dark) to 255 (full).
    fn set_speed_indicator(&mut self, intensity: u8);
}

/// The computed outputs of one tick, applied to the [`LampPort`] and
/// returned to the caller for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LampCommands {
    pub turn_left: bool,
    pub turn_right: bool,
    pub dipped_beam: bool,
    pub high_beam: bool,
    pub brake: bool,
    pub speed_duty: u8,
}

impl LampCommands {
    /// Everything dark — the state before the first tick.
    pub fn all_off() -> Self {
        Self::default()
    }

    /// Write every channel through the port, in channel order.
    pub fn apply(&self, port: &mut impl LampPort) {
        port.set_lamp(Lamp::TurnLeft, self.turn_left);
        port.set_lamp(Lamp::TurnRight, self.turn_right);
        port.set_lamp(Lamp::DippedBeam, self.dipped_beam);
        port.set_lamp(Lamp::HighBeam, self.high_beam);
        port.set_lamp(Lamp::Brake, self.brake);
        port.set_speed_indicator(self.speed_duty);
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink (controller → logging / display)
// ───────────────────────────────────────────────────────────────

/// The controller reports structured [`DashboardEvent`]s through this port.
/// Adapters decide where they go — the simulator logs them, a bench rig
/// might mirror them onto a serial console.
pub trait EventSink {
    fn emit(&mut self, event: &DashboardEvent);
}

/// Sink that discards everything. Handy in tests and benches.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &DashboardEvent) {}
}
