//! Signal-conditioning primitives.
//!
//! Four small, reusable building blocks that turn raw polled switch levels
//! into the stateful behaviour the light controller composes:
//!
//! | Primitive        | Purpose                                         |
//! |------------------|-------------------------------------------------|
//! | [`EdgeDetector`] | Classify a boolean stream into rising/falling   |
//! | [`EdgeToggle`]   | Flip a latch on a configured edge               |
//! | [`BlinkGenerator`] | Drift-free start/stop square wave             |
//! | [`Integrator`]   | Bounded trapezoidal integration of a rate       |
//!
//! None of them reads a clock on its own: timed primitives take the current
//! monotonic millisecond counter (`u32`, wrapping) as a `tick`/`update`
//! argument, so every one of them is deterministic under test. All
//! elapsed-time maths is `wrapping_sub` — counter wraparound after ~49.7
//! days must not corrupt a phase comparison.

pub mod blink;
pub mod edge;
pub mod integrate;
pub mod toggle;

pub use blink::BlinkGenerator;
pub use edge::{Edge, EdgeDetector};
pub use integrate::Integrator;
pub use toggle::EdgeToggle;
