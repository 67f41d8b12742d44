//! Logical I/O channels of the car shield.
//!
//! The controller addresses the shield only through these identifiers; pin
//! numbers, pin modes and wiring polarity belong to whichever adapter
//! implements the ports. The trainer's switches are pull-up wired: an idle
//! switch reads `true`, a pressed one reads `false`.

/// The seven switch inputs, read as raw boolean levels once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Switch {
    TurnLeft = 0,
    TurnRight = 1,
    Stop = 2,
    DippedBeam = 3,
    HighBeam = 4,
    Accelerate = 5,
    Decelerate = 6,
}

impl Switch {
    pub const COUNT: usize = 7;

    pub const ALL: [Switch; Self::COUNT] = [
        Switch::TurnLeft,
        Switch::TurnRight,
        Switch::Stop,
        Switch::DippedBeam,
        Switch::HighBeam,
        Switch::Accelerate,
        Switch::Decelerate,
    ];

    /// Index into per-switch adapter state tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The five boolean lamp outputs. The speed indicator is not listed here:
/// it is the shield's single PWM channel and is addressed directly by
/// [`LampPort::set_speed_indicator`](crate::app::ports::LampPort::set_speed_indicator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Lamp {
    TurnLeft = 0,
    TurnRight = 1,
    DippedBeam = 2,
    HighBeam = 3,
    Brake = 4,
}

impl Lamp {
    pub const COUNT: usize = 5;

    pub const ALL: [Lamp; Self::COUNT] = [
        Lamp::TurnLeft,
        Lamp::TurnRight,
        Lamp::DippedBeam,
        Lamp::HighBeam,
        Lamp::Brake,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}
