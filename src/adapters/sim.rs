//! Simulated dashboard shield.
//!
//! [`SimShield`] stands in for the real switch/lamp hardware: switch
//! levels are plain latched booleans (idle-high, matching the pull-up
//! wiring of the physical shield) and lamp writes are recorded so the
//! terminal UI can render them. A small deadline queue turns momentary
//! key presses into realistic press-then-release pulses.

use heapless::Vec;
use log::warn;

use crate::app::ports::{LampPort, SwitchPort};
use crate::channels::{Lamp, Switch};

/// Most taps that can be mid-flight at once. Keyboard input arrives far
/// slower than the control loop drains this.
const TAP_QUEUE_DEPTH: usize = 8;

/// In-memory shield: latched switch levels plus recorded lamp state.
pub struct SimShield {
    levels: [bool; Switch::COUNT],
    lamps: [bool; Lamp::COUNT],
    speed_duty: u8,
    pending: Vec<(Switch, u32, u32), TAP_QUEUE_DEPTH>,
}

impl Default for SimShield {
    fn default() -> Self {
        Self::new()
    }
}

impl SimShield {
    /// All switches released (idle-high), all lamps dark.
    pub fn new() -> Self {
        Self {
            levels: [true; Switch::COUNT],
            lamps: [false; Lamp::COUNT],
            speed_duty: 0,
            pending: Vec::new(),
        }
    }

    /// Latch a switch to an explicit level (`false` = pressed).
    pub fn set_level(&mut self, switch: Switch, level: bool) {
        self.levels[switch.index()] = level;
    }

    pub fn press(&mut self, switch: Switch) {
        self.set_level(switch, false);
    }

    pub fn release(&mut self, switch: Switch) {
        self.set_level(switch, true);
    }

    /// Flip a latched switch, returning the new level.
    pub fn toggle_level(&mut self, switch: Switch) -> bool {
        let level = !self.levels[switch.index()];
        self.set_level(switch, level);
        level
    }

    /// Press now, auto-release after `hold_ms` (serviced by [`Self::service`]).
    /// A full queue drops the tap rather than leaving a switch stuck low.
    pub fn tap(&mut self, switch: Switch, now_ms: u32, hold_ms: u32) {
        if self.pending.push((switch, now_ms, hold_ms)).is_err() {
            warn!("tap queue full, ignoring {switch:?}");
            return;
        }
        self.press(switch);
    }

    /// Release every tapped switch whose hold time has elapsed.
    pub fn service(&mut self, now_ms: u32) {
        let mut i = 0;
        while i < self.pending.len() {
            let (switch, pressed_at, hold_ms) = self.pending[i];
            if now_ms.wrapping_sub(pressed_at) >= hold_ms {
                self.release(switch);
                self.pending.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }

    pub fn lamp(&self, lamp: Lamp) -> bool {
        self.lamps[lamp.index()]
    }

    pub fn speed_duty(&self) -> u8 {
        self.speed_duty
    }

    /// One-line lamp panel for the terminal, `#` lit and `.` dark.
    pub fn render(&self) -> String {
        let glyph = |lamp: Lamp| if self.lamp(lamp) { '#' } else { '.' };
        format!(
            "L[{}] R[{}] DIP[{}] HIGH[{}] BRK[{}] SPD[{:>3}]",
            glyph(Lamp::TurnLeft),
            glyph(Lamp::TurnRight),
            glyph(Lamp::DippedBeam),
            glyph(Lamp::HighBeam),
            glyph(Lamp::Brake),
            self.speed_duty,
        )
    }
}

impl SwitchPort for SimShield {
    fn read_switch(&mut self, switch: Switch) -> bool {
        self.levels[switch.index()]
    }
}

impl LampPort for SimShield {
    fn set_lamp(&mut self, lamp: Lamp, on: bool) {
        self.lamps[lamp.index()] = on;
    }

    fn set_speed_indicator(&mut self, intensity: u8) {
        self.speed_duty = intensity;
    }
}
