//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements           | Connects to                |
//! |------------|----------------------|----------------------------|
//! | `sim`      | SwitchPort, LampPort | In-memory simulated shield |
//! | `hal`      | SwitchPort, LampPort | embedded-hal pins + PWM    |
//! | `log_sink` | EventSink            | Host logger (stderr)       |

pub mod hal;
pub mod log_sink;
pub mod sim;

pub use hal::HalShield;
pub use log_sink::LogEventSink;
pub use sim::SimShield;
