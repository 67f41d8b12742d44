//! Error types for the dashboard trainer.
//!
//! The control core is total: once constructed it cannot fail, so errors
//! only exist at the configuration boundary. Everything funnels into
//! [`ConfigError`], which the binary reports through `anyhow` at startup.

use core::fmt;

/// Why a configuration could not be loaded or accepted.
#[derive(Debug)]
pub enum ConfigError {
    /// No file at the given path.
    NotFound,
    /// The file exists but could not be read.
    Io(std::io::Error),
    /// The file is not valid JSON for [`crate::config::ShieldConfig`].
    Parse(serde_json::Error),
    /// The values parsed but violate a timing constraint.
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "config file not found"),
            Self::Io(e) => write!(f, "config read failed: {e}"),
            Self::Parse(e) => write!(f, "config parse failed: {e}"),
            Self::Invalid(msg) => write!(f, "config invalid: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}
