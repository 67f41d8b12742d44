//! CarShield dashboard-trainer library.
//!
//! Signal-conditioning primitives and the lighting control loop for a
//! seven-switch, six-lamp vehicle dashboard trainer. Pure logic lives in
//! [`signal`] and [`control`]; hardware enters only through the port
//! traits in [`app::ports`], with a simulated shield and an
//! `embedded-hal` bridge under [`adapters`].

#![deny(unused_must_use)]

pub mod app;
pub mod channels;
pub mod clock;
pub mod config;
pub mod control;
pub mod error;
pub mod logger;
pub mod signal;

pub mod adapters;
