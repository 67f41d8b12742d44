//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured dashboard events to the
//! host logger (stderr, so the terminal UI on stdout stays clean). A
//! future CAN or telemetry adapter would implement the same trait.

use log::{debug, info};

use crate::app::events::DashboardEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`DashboardEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &DashboardEvent) {
        match event {
            DashboardEvent::BlinkerEngaged { side } => {
                info!("TURN | {side:?} engaged");
            }
            DashboardEvent::BlinkerCancelled { side, cause } => {
                info!("TURN | {side:?} cancelled ({cause:?})");
            }
            DashboardEvent::BeamToggled { beam, on } => {
                info!("BEAM | {beam:?} switched {}", on_off(*on));
            }
            DashboardEvent::InterlockForced { beam, on } => {
                info!("LOCK | {beam:?} forced {}", on_off(*on));
            }
            DashboardEvent::Status(status) => {
                let lamps = &status.lamps;
                debug!(
                    "STATUS | L={} R={} dip={} high={} brk={} spd={} | pressed=[{}]",
                    glyph(lamps.turn_left),
                    glyph(lamps.turn_right),
                    glyph(lamps.dipped_beam),
                    glyph(lamps.high_beam),
                    glyph(lamps.brake),
                    lamps.speed_duty,
                    pressed_list(status),
                );
            }
        }
    }
}

fn glyph(on: bool) -> char {
    if on { '#' } else { '.' }
}

/// Comma-joined short names of every switch currently held low.
fn pressed_list(status: &crate::app::events::DashboardStatus) -> String {
    use crate::channels::Switch;

    let mut out = String::new();
    for switch in Switch::ALL {
        if !status.switches.level(switch) {
            if !out.is_empty() {
                out.push(',');
            }
            out.push_str(match switch {
                Switch::TurnLeft => "left",
                Switch::TurnRight => "right",
                Switch::Stop => "stop",
                Switch::DippedBeam => "dip",
                Switch::HighBeam => "high",
                Switch::Accelerate => "accel",
                Switch::Decelerate => "decel",
            });
        }
    }
    out
}
