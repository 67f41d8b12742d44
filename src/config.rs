//! System configuration parameters
//!
//! All tunable timing for the dashboard trainer. Values can be overridden
//! by a JSON file passed on the command line; anything the file omits
//! keeps its default.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Core timing configuration.
///
/// Validation rejects bad values instead of clamping them, so a typo in a
/// config file is reported rather than silently reinterpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShieldConfig {
    // --- Lighting ---
    /// Full turn-signal blink cycle (milliseconds, on + off).
    pub turn_blink_period_ms: u32,

    // --- Speed ---
    /// Time of full acceleration to reach the indicator's top of scale
    /// (milliseconds).
    pub accel_time_ms: u32,

    // --- Timing ---
    /// Control loop interval (milliseconds).
    pub control_loop_interval_ms: u32,
    /// Status report interval (milliseconds).
    pub status_interval_ms: u32,
}

impl Default for ShieldConfig {
    fn default() -> Self {
        Self {
            // Lighting
            turn_blink_period_ms: 1000, // 1 Hz

            // Speed
            accel_time_ms: 1000, // 0 to full scale in 1 s

            // Timing
            control_loop_interval_ms: 10, // 100 Hz
            status_interval_ms: 1000,     // 1 Hz
        }
    }
}

impl ShieldConfig {
    /// Check the timing constraints the control loop depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.turn_blink_period_ms < 2 {
            return Err(ConfigError::Invalid(
                "turn_blink_period_ms must be at least 2 so both blink phases are non-zero",
            ));
        }
        if self.accel_time_ms == 0 {
            return Err(ConfigError::Invalid("accel_time_ms must be non-zero"));
        }
        if self.control_loop_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "control_loop_interval_ms must be non-zero",
            ));
        }
        // The on-phase is period/2 rounded down, never longer than off.
        let shorter_phase_ms = self.turn_blink_period_ms / 2;
        if self.control_loop_interval_ms > shorter_phase_ms / 4 {
            return Err(ConfigError::Invalid(
                "control loop must sample each blink phase several times",
            ));
        }
        if self.accel_time_ms < self.control_loop_interval_ms {
            return Err(ConfigError::Invalid(
                "accel_time_ms must span at least one control tick",
            ));
        }
        if self.status_interval_ms == 0 {
            return Err(ConfigError::Invalid("status_interval_ms must be non-zero"));
        }
        Ok(())
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ConfigError::NotFound
            } else {
                ConfigError::Io(e)
            }
        })?;
        let config: Self = serde_json::from_str(&text).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }
}
