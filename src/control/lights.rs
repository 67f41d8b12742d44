//! Light-control state machine.
//!
//! [`LightController`] owns one signal-conditioning pipeline per logical
//! channel and runs them once per tick, in a fixed order, because later
//! steps read the outputs of earlier ones:
//!
//! 1. snapshot the raw switch levels;
//! 2. edge-detect the five rule-driving switches;
//! 3. advance both turn blinkers;
//! 4. update the beam toggles, then the detectors watching their outputs;
//! 5. integrate the accelerator/decelerator into the speed position and
//!    coerce it into `[0, accel_time_ms]`;
//! 6. turn-signal rules — a falling stalk edge toggles its own side and
//!    force-stops the other (one side at a time), a falling stop edge
//!    force-stops both;
//! 7. headlight interlock on the *toggle outputs*: high beam rising forces
//!    dipped on, dipped falling forces high off;
//! 8. build [`LampCommands`], write them through the port, return them.
//!
//! The interlock watches the toggles' outputs rather than the raw switches,
//! so a forced change is itself visible as an edge on the next tick — no
//! rule consumes those edges, which is what keeps the coupling from
//! cascading.

use log::trace;

use crate::app::events::{Beam, CancelCause, DashboardEvent, DashboardStatus, TurnSide};
use crate::app::ports::{EventSink, LampCommands, LampPort, SwitchPort, SwitchSnapshot};
use crate::config::ShieldConfig;
use crate::signal::{BlinkGenerator, Edge, EdgeDetector, EdgeToggle, Integrator};

/// Per-tick composition of the signal primitives into the vehicle's
/// lighting rules.
pub struct LightController {
    ed_left: EdgeDetector,
    ed_right: EdgeDetector,
    ed_stop: EdgeDetector,
    ed_dipped: EdgeDetector,
    ed_high: EdgeDetector,

    blink_left: BlinkGenerator,
    blink_right: BlinkGenerator,

    dipped: EdgeToggle,
    high: EdgeToggle,
    ed_dipped_out: EdgeDetector,
    ed_high_out: EdgeDetector,

    accel: Integrator,
    accel_time_ms: u32,

    last_inputs: SwitchSnapshot,
    last_outputs: LampCommands,
}

impl LightController {
    /// Build the pipeline, seeding every edge detector with the *actual*
    /// current level so the first tick cannot see phantom edges.
    pub fn new(config: &ShieldConfig, initial: &SwitchSnapshot, now_ms: u32) -> Self {
        let dipped = EdgeToggle::default();
        let high = EdgeToggle::default();
        let ed_dipped_out = EdgeDetector::new(dipped.state());
        let ed_high_out = EdgeDetector::new(high.state());

        Self {
            ed_left: EdgeDetector::new(initial.turn_left),
            ed_right: EdgeDetector::new(initial.turn_right),
            ed_stop: EdgeDetector::new(initial.stop),
            ed_dipped: EdgeDetector::new(initial.dipped_beam),
            ed_high: EdgeDetector::new(initial.high_beam),
            blink_left: BlinkGenerator::new(config.turn_blink_period_ms),
            blink_right: BlinkGenerator::new(config.turn_blink_period_ms),
            dipped,
            high,
            ed_dipped_out,
            ed_high_out,
            accel: Integrator::new(now_ms),
            accel_time_ms: config.accel_time_ms,
            last_inputs: *initial,
            last_outputs: LampCommands::all_off(),
        }
    }

    /// Run one full control cycle: read switches → condition signals →
    /// apply rules → write lamps. Returns the commands that were written.
    pub fn tick<S, E>(&mut self, now_ms: u32, shield: &mut S, sink: &mut E) -> LampCommands
    where
        S: SwitchPort + LampPort,
        E: EventSink,
    {
        let inputs = shield.read_all();

        // Signal conditioning.
        let left_edge = self.ed_left.update(inputs.turn_left);
        let right_edge = self.ed_right.update(inputs.turn_right);
        let stop_edge = self.ed_stop.update(inputs.stop);
        self.blink_left.update(now_ms);
        self.blink_right.update(now_ms);
        let dipped_edge = self.ed_dipped.update(inputs.dipped_beam);
        let high_edge = self.ed_high.update(inputs.high_beam);

        let dipped_was = self.dipped.state();
        self.dipped.update(dipped_edge);
        if self.dipped.state() != dipped_was {
            sink.emit(&DashboardEvent::BeamToggled {
                beam: Beam::Dipped,
                on: self.dipped.state(),
            });
        }
        let high_was = self.high.state();
        self.high.update(high_edge);
        if self.high.state() != high_was {
            sink.emit(&DashboardEvent::BeamToggled {
                beam: Beam::High,
                on: self.high.state(),
            });
        }
        let dipped_out_edge = self.ed_dipped_out.update(self.dipped.state());
        let high_out_edge = self.ed_high_out.update(self.high.state());

        // Double-pedal drive: pressing both pedals cancels out.
        let rate = i32::from(!inputs.accelerate) - i32::from(!inputs.decelerate);
        self.accel.update(now_ms, rate);
        self.accel.coerce(0, i64::from(self.accel_time_ms));

        // Turn-signal rules. A falling stalk edge toggles its own side and
        // unconditionally stops the other; with both edges in the same
        // tick the right rule runs last and wins.
        if left_edge == Edge::Falling {
            let engage = !self.blink_left.is_blinking();
            self.blink_left.set_blinking(engage, now_ms);
            sink.emit(&turn_event(TurnSide::Left, engage, CancelCause::Stalk));

            let right_ran = self.blink_right.is_blinking();
            self.blink_right.stop();
            if right_ran {
                sink.emit(&DashboardEvent::BlinkerCancelled {
                    side: TurnSide::Right,
                    cause: CancelCause::OppositeSide,
                });
            }
        }
        if right_edge == Edge::Falling {
            let engage = !self.blink_right.is_blinking();
            self.blink_right.set_blinking(engage, now_ms);
            sink.emit(&turn_event(TurnSide::Right, engage, CancelCause::Stalk));

            let left_ran = self.blink_left.is_blinking();
            self.blink_left.stop();
            if left_ran {
                sink.emit(&DashboardEvent::BlinkerCancelled {
                    side: TurnSide::Left,
                    cause: CancelCause::OppositeSide,
                });
            }
        }
        if stop_edge == Edge::Falling {
            if self.blink_left.is_blinking() {
                sink.emit(&DashboardEvent::BlinkerCancelled {
                    side: TurnSide::Left,
                    cause: CancelCause::Brake,
                });
            }
            if self.blink_right.is_blinking() {
                sink.emit(&DashboardEvent::BlinkerCancelled {
                    side: TurnSide::Right,
                    cause: CancelCause::Brake,
                });
            }
            self.blink_left.stop();
            self.blink_right.stop();
        }

        // Headlight interlock, on the toggle outputs.
        if high_out_edge == Edge::Rising {
            let was = self.dipped.state();
            self.dipped.set_state(true);
            if !was {
                sink.emit(&DashboardEvent::InterlockForced {
                    beam: Beam::Dipped,
                    on: true,
                });
            }
        }
        if dipped_out_edge == Edge::Falling {
            let was = self.high.state();
            self.high.set_state(false);
            if was {
                sink.emit(&DashboardEvent::InterlockForced {
                    beam: Beam::High,
                    on: false,
                });
            }
        }

        // Output stage. The brake lamp follows the raw decelerator level
        // directly; the speed indicator is the coerced integral rescaled
        // onto the PWM range.
        let commands = LampCommands {
            turn_left: self.blink_left.state(),
            turn_right: self.blink_right.state(),
            dipped_beam: self.dipped.state(),
            high_beam: self.high.state(),
            brake: !inputs.decelerate,
            speed_duty: rescale_to_duty(self.accel.state(), self.accel_time_ms),
        };
        commands.apply(shield);

        trace!(
            "tick t={now_ms} rate={rate} speed={} lamps={commands:?}",
            self.accel.state()
        );

        self.last_inputs = inputs;
        self.last_outputs = commands;
        commands
    }

    /// Snapshot of the most recent tick, for periodic status reports.
    pub fn status(&self) -> DashboardStatus {
        DashboardStatus {
            switches: self.last_inputs,
            lamps: self.last_outputs,
        }
    }
}

fn turn_event(side: TurnSide, engage: bool, cause: CancelCause) -> DashboardEvent {
    if engage {
        DashboardEvent::BlinkerEngaged { side }
    } else {
        DashboardEvent::BlinkerCancelled { side, cause }
    }
}

/// Linear integer rescale from `[0, in_max]` onto the PWM range `[0, 255]`,
/// truncating. `value` is expected pre-coerced into the input range.
fn rescale_to_duty(value: i64, in_max: u32) -> u8 {
    if in_max == 0 {
        return 0;
    }
    (value * 255 / i64::from(in_max)) as u8
}
