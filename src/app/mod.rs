//! Application boundary — port traits and the events that cross them.
//!
//! The light controller in [`control`](crate::control) is pure logic; every
//! interaction with the outside world goes through the traits in [`ports`],
//! so the whole signal path is testable without a shield attached.

pub mod events;
pub mod ports;
