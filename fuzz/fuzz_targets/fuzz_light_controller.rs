//! Fuzz target: `LightController::tick`
//!
//! Interprets the input as a stream of switch presses and releases,
//! ticks the controller through them, and asserts the cross-signal
//! lighting rules after every tick: turn sides mutually exclusive, beam
//! lamps matching a reference replay of the toggle/interlock mechanism,
//! brake lamp mirroring the pedal.
//!
//! cargo fuzz run fuzz_light_controller

#![no_main]

use libfuzzer_sys::fuzz_target;

use carshield::app::events::DashboardEvent;
use carshield::app::ports::{EventSink, LampPort, SwitchPort, SwitchSnapshot};
use carshield::channels::{Lamp, Switch};
use carshield::config::ShieldConfig;
use carshield::control::LightController;

struct FuzzShield {
    levels: [bool; Switch::COUNT],
    lamps: [bool; Lamp::COUNT],
    speed_duty: u8,
}

impl SwitchPort for FuzzShield {
    fn read_switch(&mut self, switch: Switch) -> bool {
        self.levels[switch.index()]
    }
}

impl LampPort for FuzzShield {
    fn set_lamp(&mut self, lamp: Lamp, on: bool) {
        self.lamps[lamp.index()] = on;
    }

    fn set_speed_indicator(&mut self, intensity: u8) {
        self.speed_duty = intensity;
    }
}

struct NullLog;

impl EventSink for NullLog {
    fn emit(&mut self, _event: &DashboardEvent) {}
}

/// Reference replay of the beam channel: raw-falling-edge toggles, then
/// output-edge detectors sampled before the interlock writes bite. The
/// sampling order means no tick-local "high implies dipped" claim holds
/// in general, so the oracle replays the mechanism step for step.
struct BeamReference {
    dipped: bool,
    high: bool,
    raw_dipped_last: bool,
    raw_high_last: bool,
    dipped_out_last: bool,
    high_out_last: bool,
}

impl BeamReference {
    fn idle() -> Self {
        Self {
            dipped: false,
            high: false,
            raw_dipped_last: true,
            raw_high_last: true,
            dipped_out_last: false,
            high_out_last: false,
        }
    }

    fn step(&mut self, raw_dipped: bool, raw_high: bool) -> (bool, bool) {
        let dipped_fell = !raw_dipped && self.raw_dipped_last;
        let high_fell = !raw_high && self.raw_high_last;
        self.raw_dipped_last = raw_dipped;
        self.raw_high_last = raw_high;
        if dipped_fell {
            self.dipped = !self.dipped;
        }
        if high_fell {
            self.high = !self.high;
        }

        let dipped_out_fell = !self.dipped && self.dipped_out_last;
        let high_out_rose = self.high && !self.high_out_last;
        self.dipped_out_last = self.dipped;
        self.high_out_last = self.high;
        if high_out_rose {
            self.dipped = true;
        }
        if dipped_out_fell {
            self.high = false;
        }
        (self.dipped, self.high)
    }
}

fuzz_target!(|data: &[u8]| {
    let config = ShieldConfig::default();
    let mut shield = FuzzShield {
        levels: [true; Switch::COUNT],
        lamps: [false; Lamp::COUNT],
        speed_duty: 0,
    };
    let mut controller = LightController::new(&config, &SwitchSnapshot::idle(), 0);
    let mut sink = NullLog;

    // Each byte flips one switch (low bits) to the level in the top bit,
    // then runs one control tick.
    let mut now_ms = 0u32;
    let mut last_duty = 0u8;
    let mut beams = BeamReference::idle();
    for &byte in data {
        let switch = usize::from(byte) % Switch::COUNT;
        shield.levels[switch] = byte & 0x80 != 0;

        let accel_only = !shield.levels[Switch::Accelerate.index()]
            && shield.levels[Switch::Decelerate.index()];
        let raw_dipped = shield.levels[Switch::DippedBeam.index()];
        let raw_high = shield.levels[Switch::HighBeam.index()];

        now_ms = now_ms.wrapping_add(config.control_loop_interval_ms);
        let cmds = controller.tick(now_ms, &mut shield, &mut sink);

        assert!(
            !(cmds.turn_left && cmds.turn_right),
            "both turn lamps lit at t={now_ms}"
        );
        let (want_dipped, want_high) = beams.step(raw_dipped, raw_high);
        assert_eq!(
            (cmds.dipped_beam, cmds.high_beam),
            (want_dipped, want_high),
            "beam lamps diverged from the reference at t={now_ms}"
        );
        assert_eq!(
            cmds.brake,
            !shield.levels[Switch::Decelerate.index()],
            "brake lamp must mirror the pedal level"
        );
        if accel_only {
            assert!(
                cmds.speed_duty >= last_duty,
                "speed fell while only the accelerator was held at t={now_ms}"
            );
        }
        last_duty = cmds.speed_duty;
    }
});
