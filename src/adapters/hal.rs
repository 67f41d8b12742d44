//! Hardware adapter — bridges real shield pins to the domain port traits.
//!
//! Generic over [`embedded-hal`] 1.0 traits, so the same control core
//! drives any board whose HAL exposes digital pins and one PWM channel.
//! The control loop is total and never stops for I/O trouble, so pin
//! errors are absorbed here: a failed switch read repeats the last good
//! level, a failed lamp write is logged and dropped.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal/1

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::app::ports::{LampPort, SwitchPort};
use crate::channels::{Lamp, Switch};

/// Concrete adapter that combines the shield's pins behind port traits.
///
/// Switch pins are expected to be pulled up (idle-high, pressed-low),
/// matching the shield's wiring.
pub struct HalShield<I, O, P> {
    switches: [I; Switch::COUNT],
    lamps: [O; Lamp::COUNT],
    speed_pwm: P,
    last_levels: [bool; Switch::COUNT],
}

impl<I, O, P> HalShield<I, O, P>
where
    I: InputPin,
    O: OutputPin,
    P: SetDutyCycle,
{
    /// Pin arrays are indexed by [`Switch::index`] / [`Lamp::index`].
    pub fn new(switches: [I; Switch::COUNT], lamps: [O; Lamp::COUNT], speed_pwm: P) -> Self {
        Self {
            switches,
            lamps,
            speed_pwm,
            last_levels: [true; Switch::COUNT],
        }
    }
}

// ── SwitchPort implementation ─────────────────────────────────

impl<I, O, P> SwitchPort for HalShield<I, O, P>
where
    I: InputPin,
    O: OutputPin,
    P: SetDutyCycle,
{
    fn read_switch(&mut self, switch: Switch) -> bool {
        let i = switch.index();
        match self.switches[i].is_high() {
            Ok(level) => {
                self.last_levels[i] = level;
                level
            }
            Err(err) => {
                warn!("switch {switch:?} read failed: {err:?}, repeating last level");
                self.last_levels[i]
            }
        }
    }
}

// ── LampPort implementation ───────────────────────────────────

impl<I, O, P> LampPort for HalShield<I, O, P>
where
    I: InputPin,
    O: OutputPin,
    P: SetDutyCycle,
{
    fn set_lamp(&mut self, lamp: Lamp, on: bool) {
        let pin = &mut self.lamps[lamp.index()];
        let result = if on { pin.set_high() } else { pin.set_low() };
        if let Err(err) = result {
            warn!("lamp {lamp:?} write failed: {err:?}");
        }
    }

    fn set_speed_indicator(&mut self, intensity: u8) {
        if let Err(err) = self
            .speed_pwm
            .set_duty_cycle_fraction(u16::from(intensity), 255)
        {
            warn!("speed indicator write failed: {err:?}");
        }
    }
}
