//! Integration tests: switches → LightController → lamps.
//!
//! Drive the full control pipeline through the port traits with a
//! recording mock shield, the way the simulator binary drives it, and
//! assert on lamp outputs and emitted events. Time is advanced in 10 ms
//! control ticks.

use carshield::app::events::{Beam, CancelCause, DashboardEvent, TurnSide};
use carshield::app::ports::{EventSink, LampCommands, LampPort, SwitchPort, SwitchSnapshot};
use carshield::channels::{Lamp, Switch};
use carshield::config::ShieldConfig;
use carshield::control::LightController;

const TICK_MS: u32 = 10;

// ── Mock implementations ──────────────────────────────────────

struct RecordingShield {
    levels: [bool; Switch::COUNT],
    lamps: [bool; Lamp::COUNT],
    speed_duty: u8,
    lamp_writes: usize,
}

impl RecordingShield {
    fn idle() -> Self {
        Self {
            levels: [true; Switch::COUNT],
            lamps: [false; Lamp::COUNT],
            speed_duty: 0,
            lamp_writes: 0,
        }
    }

    fn press(&mut self, switch: Switch) {
        self.levels[switch.index()] = false;
    }

    fn release(&mut self, switch: Switch) {
        self.levels[switch.index()] = true;
    }

    fn lamp(&self, lamp: Lamp) -> bool {
        self.lamps[lamp.index()]
    }
}

impl SwitchPort for RecordingShield {
    fn read_switch(&mut self, switch: Switch) -> bool {
        self.levels[switch.index()]
    }
}

impl LampPort for RecordingShield {
    fn set_lamp(&mut self, lamp: Lamp, on: bool) {
        self.lamps[lamp.index()] = on;
        self.lamp_writes += 1;
    }

    fn set_speed_indicator(&mut self, intensity: u8) {
        self.speed_duty = intensity;
    }
}

struct EventLog {
    events: Vec<DashboardEvent>,
}

impl EventLog {
    fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: &DashboardEvent) {
        self.events.push(*event);
    }
}

fn rig() -> (LightController, RecordingShield, EventLog) {
    let config = ShieldConfig::default();
    let controller = LightController::new(&config, &SwitchSnapshot::idle(), 0);
    (controller, RecordingShield::idle(), EventLog::new())
}

/// Tick every 10 ms over `(from_ms, to_ms]`, returning the last commands.
fn run_until(
    controller: &mut LightController,
    shield: &mut RecordingShield,
    sink: &mut EventLog,
    from_ms: u32,
    to_ms: u32,
) -> LampCommands {
    let mut commands = LampCommands::all_off();
    let mut t = from_ms;
    while t < to_ms {
        t += TICK_MS;
        commands = controller.tick(t, shield, sink);
    }
    commands
}

// ── Turn signals ──────────────────────────────────────────────

#[test]
fn left_tap_engages_and_blinks_at_configured_cadence() {
    let (mut ctl, mut shield, mut sink) = rig();
    ctl.tick(0, &mut shield, &mut sink);

    shield.press(Switch::TurnLeft);
    let cmds = ctl.tick(10, &mut shield, &mut sink);
    assert!(cmds.turn_left, "blinker engages in its on-phase");
    shield.release(Switch::TurnLeft);

    // Default period 1000 ms: on for 500 ms from the engage tick, then
    // off for 500 ms, then on again.
    let cmds = run_until(&mut ctl, &mut shield, &mut sink, 10, 500);
    assert!(cmds.turn_left, "still on just before the phase boundary");
    let cmds = run_until(&mut ctl, &mut shield, &mut sink, 500, 510);
    assert!(!cmds.turn_left, "dark once 500 ms have elapsed");
    assert!(!shield.lamp(Lamp::TurnLeft));
    let cmds = run_until(&mut ctl, &mut shield, &mut sink, 510, 1010);
    assert!(cmds.turn_left, "lit again one full period after engaging");
}

#[test]
fn releasing_the_stalk_does_not_cancel() {
    let (mut ctl, mut shield, mut sink) = rig();
    ctl.tick(0, &mut shield, &mut sink);

    shield.press(Switch::TurnLeft);
    ctl.tick(10, &mut shield, &mut sink);
    shield.release(Switch::TurnLeft);
    let cmds = run_until(&mut ctl, &mut shield, &mut sink, 10, 200);
    assert!(cmds.turn_left, "rising edge of the stalk is ignored");
}

#[test]
fn second_tap_cancels_with_stalk_cause() {
    let (mut ctl, mut shield, mut sink) = rig();
    ctl.tick(0, &mut shield, &mut sink);

    shield.press(Switch::TurnLeft);
    ctl.tick(10, &mut shield, &mut sink);
    shield.release(Switch::TurnLeft);
    run_until(&mut ctl, &mut shield, &mut sink, 10, 100);

    shield.press(Switch::TurnLeft);
    let cmds = ctl.tick(110, &mut shield, &mut sink);
    assert!(!cmds.turn_left);
    assert_eq!(
        sink.events,
        vec![
            DashboardEvent::BlinkerEngaged {
                side: TurnSide::Left
            },
            DashboardEvent::BlinkerCancelled {
                side: TurnSide::Left,
                cause: CancelCause::Stalk
            },
        ]
    );
}

#[test]
fn right_stalk_overrides_a_running_left_blinker() {
    let (mut ctl, mut shield, mut sink) = rig();
    ctl.tick(0, &mut shield, &mut sink);

    shield.press(Switch::TurnLeft);
    ctl.tick(10, &mut shield, &mut sink);
    shield.release(Switch::TurnLeft);
    run_until(&mut ctl, &mut shield, &mut sink, 10, 100);

    shield.press(Switch::TurnRight);
    let cmds = ctl.tick(110, &mut shield, &mut sink);
    assert!(cmds.turn_right);
    assert!(!cmds.turn_left, "sides are mutually exclusive");
    assert!(sink.events.contains(&DashboardEvent::BlinkerCancelled {
        side: TurnSide::Left,
        cause: CancelCause::OppositeSide
    }));
}

#[test]
fn simultaneous_stalk_presses_leave_right_running() {
    let (mut ctl, mut shield, mut sink) = rig();
    ctl.tick(0, &mut shield, &mut sink);

    shield.press(Switch::TurnLeft);
    shield.press(Switch::TurnRight);
    let cmds = ctl.tick(10, &mut shield, &mut sink);

    assert!(cmds.turn_right, "right side wins the tie");
    assert!(!cmds.turn_left);
    assert_eq!(
        sink.events,
        vec![
            DashboardEvent::BlinkerEngaged {
                side: TurnSide::Left
            },
            DashboardEvent::BlinkerEngaged {
                side: TurnSide::Right
            },
            DashboardEvent::BlinkerCancelled {
                side: TurnSide::Left,
                cause: CancelCause::OppositeSide
            },
        ]
    );
}

#[test]
fn stop_switch_cancels_both_blinkers() {
    let (mut ctl, mut shield, mut sink) = rig();
    ctl.tick(0, &mut shield, &mut sink);

    shield.press(Switch::TurnLeft);
    ctl.tick(10, &mut shield, &mut sink);
    shield.release(Switch::TurnLeft);
    run_until(&mut ctl, &mut shield, &mut sink, 10, 100);

    shield.press(Switch::Stop);
    let cmds = ctl.tick(110, &mut shield, &mut sink);
    assert!(!cmds.turn_left);
    assert!(!cmds.turn_right);
    assert!(sink.events.contains(&DashboardEvent::BlinkerCancelled {
        side: TurnSide::Left,
        cause: CancelCause::Brake
    }));

    // A later tap engages again from a fresh phase.
    shield.release(Switch::Stop);
    run_until(&mut ctl, &mut shield, &mut sink, 110, 200);
    shield.press(Switch::TurnLeft);
    let cmds = ctl.tick(210, &mut shield, &mut sink);
    assert!(cmds.turn_left);
}

// ── Headlight interlock ───────────────────────────────────────

#[test]
fn high_beam_drags_dipped_on() {
    let (mut ctl, mut shield, mut sink) = rig();
    ctl.tick(0, &mut shield, &mut sink);

    shield.press(Switch::HighBeam);
    let cmds = ctl.tick(10, &mut shield, &mut sink);
    assert!(cmds.high_beam);
    assert!(cmds.dipped_beam, "dipped is forced on with high");
    assert_eq!(
        sink.events,
        vec![
            DashboardEvent::BeamToggled {
                beam: Beam::High,
                on: true
            },
            DashboardEvent::InterlockForced {
                beam: Beam::Dipped,
                on: true
            },
        ]
    );
}

#[test]
fn high_beam_off_leaves_dipped_alone() {
    let (mut ctl, mut shield, mut sink) = rig();
    ctl.tick(0, &mut shield, &mut sink);

    shield.press(Switch::HighBeam);
    ctl.tick(10, &mut shield, &mut sink);
    shield.release(Switch::HighBeam);
    run_until(&mut ctl, &mut shield, &mut sink, 10, 100);

    shield.press(Switch::HighBeam);
    let cmds = ctl.tick(110, &mut shield, &mut sink);
    assert!(!cmds.high_beam);
    assert!(cmds.dipped_beam, "dropping high must not drop dipped");
}

#[test]
fn dropping_dipped_drags_high_off() {
    let (mut ctl, mut shield, mut sink) = rig();
    ctl.tick(0, &mut shield, &mut sink);

    // High on (dipped forced on with it), then dipped switched off.
    shield.press(Switch::HighBeam);
    ctl.tick(10, &mut shield, &mut sink);
    shield.release(Switch::HighBeam);
    run_until(&mut ctl, &mut shield, &mut sink, 10, 100);

    shield.press(Switch::DippedBeam);
    let cmds = ctl.tick(110, &mut shield, &mut sink);
    assert!(!cmds.dipped_beam);
    assert!(!cmds.high_beam, "high cannot stay on without dipped");
    assert!(sink.events.contains(&DashboardEvent::InterlockForced {
        beam: Beam::High,
        on: false
    }));
}

#[test]
fn engaging_high_with_dipped_already_on_forces_nothing() {
    let (mut ctl, mut shield, mut sink) = rig();
    ctl.tick(0, &mut shield, &mut sink);

    shield.press(Switch::DippedBeam);
    ctl.tick(10, &mut shield, &mut sink);
    shield.release(Switch::DippedBeam);
    run_until(&mut ctl, &mut shield, &mut sink, 10, 100);

    shield.press(Switch::HighBeam);
    let cmds = ctl.tick(110, &mut shield, &mut sink);
    assert!(cmds.dipped_beam && cmds.high_beam);
    assert!(
        !sink
            .events
            .iter()
            .any(|e| matches!(e, DashboardEvent::InterlockForced { .. })),
        "no forcing event when dipped was already on"
    );
}

// ── Speed indicator and brake lamp ────────────────────────────

#[test]
fn accelerator_saturates_then_brake_returns_to_zero() {
    let (mut ctl, mut shield, mut sink) = rig();
    ctl.tick(0, &mut shield, &mut sink);

    // Hold the accelerator well past the 1000 ms full-scale time.
    shield.press(Switch::Accelerate);
    let cmds = run_until(&mut ctl, &mut shield, &mut sink, 0, 2000);
    assert_eq!(cmds.speed_duty, 255, "position saturates at full scale");
    assert_eq!(shield.speed_duty, 255);

    // Releasing holds the position.
    shield.release(Switch::Accelerate);
    let cmds = run_until(&mut ctl, &mut shield, &mut sink, 2000, 2500);
    assert_eq!(cmds.speed_duty, 255, "released pedals freeze the position");

    // Braking ramps it back down and lights the brake lamp.
    shield.press(Switch::Decelerate);
    let cmds = run_until(&mut ctl, &mut shield, &mut sink, 2500, 2600);
    assert!(cmds.brake);
    assert!(cmds.speed_duty < 255, "decelerating moves the needle down");
    let cmds = run_until(&mut ctl, &mut shield, &mut sink, 2600, 4600);
    assert_eq!(cmds.speed_duty, 0, "position saturates at zero");

    shield.release(Switch::Decelerate);
    let cmds = ctl.tick(4610, &mut shield, &mut sink);
    assert!(!cmds.brake, "brake lamp follows the raw pedal level");
}

#[test]
fn both_pedals_cancel_and_the_brake_lamp_stays_on() {
    let (mut ctl, mut shield, mut sink) = rig();
    ctl.tick(0, &mut shield, &mut sink);

    shield.press(Switch::Accelerate);
    run_until(&mut ctl, &mut shield, &mut sink, 0, 500);

    // The tick after the second pedal lands closes the last trapezoid;
    // from then on the opposing rates sum to zero and the needle holds.
    shield.press(Switch::Decelerate);
    let settled = ctl.tick(510, &mut shield, &mut sink).speed_duty;
    let cmds = run_until(&mut ctl, &mut shield, &mut sink, 510, 1500);
    assert_eq!(cmds.speed_duty, settled, "opposing pedals sum to zero");
    assert!(cmds.speed_duty > 0);
    assert!(cmds.brake);
}

// ── Startup and status ────────────────────────────────────────

#[test]
fn held_switches_at_startup_cause_no_phantom_actions() {
    let config = ShieldConfig::default();
    let mut shield = RecordingShield::idle();
    shield.press(Switch::HighBeam);
    shield.press(Switch::TurnLeft);

    let initial = shield.read_all();
    let mut ctl = LightController::new(&config, &initial, 0);
    let mut sink = EventLog::new();

    let cmds = run_until(&mut ctl, &mut shield, &mut sink, 0, 200);
    assert_eq!(cmds, LampCommands::all_off(), "held levels are not edges");
    assert!(sink.events.is_empty());

    // Releasing and pressing again is a real edge.
    shield.release(Switch::TurnLeft);
    run_until(&mut ctl, &mut shield, &mut sink, 200, 250);
    shield.press(Switch::TurnLeft);
    let cmds = ctl.tick(260, &mut shield, &mut sink);
    assert!(cmds.turn_left);
}

#[test]
fn status_mirrors_the_last_tick() {
    let (mut ctl, mut shield, mut sink) = rig();
    ctl.tick(0, &mut shield, &mut sink);

    shield.press(Switch::TurnLeft);
    ctl.tick(10, &mut shield, &mut sink);
    shield.release(Switch::TurnLeft);
    shield.press(Switch::Decelerate);
    let cmds = ctl.tick(20, &mut shield, &mut sink);

    let status = ctl.status();
    assert_eq!(status.lamps, cmds);
    assert!(!status.switches.decelerate);
    assert!(status.switches.turn_left);
}

#[test]
fn every_tick_writes_all_lamp_channels() {
    let (mut ctl, mut shield, mut sink) = rig();
    ctl.tick(0, &mut shield, &mut sink);
    assert_eq!(shield.lamp_writes, Lamp::COUNT);
    ctl.tick(10, &mut shield, &mut sink);
    assert_eq!(shield.lamp_writes, 2 * Lamp::COUNT);
}
