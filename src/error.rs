//! Unified error types for the traffic signal firmware.
//!
//! Nothing in the control loops is allowed to fail on data-driven input, so
//! this enum only covers startup (configuration, peripheral claims) and
//! hardware-level lamp faults.  All variants are `Copy` so the display driver
//! can log and carry on without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid or could not be parsed.
    Config(&'static str),
    /// Peripheral or task initialisation failed.
    Init(&'static str),
    /// A lamp output line could not be driven.
    Lamp(LampFault),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Lamp(e) => write!(f, "lamp: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Lamp faults
// ---------------------------------------------------------------------------

/// Which output line rejected a level change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LampFault {
    Red,
    Yellow,
    Green,
}

impl fmt::Display for LampFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "red line write failed"),
            Self::Yellow => write!(f, "yellow line write failed"),
            Self::Green => write!(f, "green line write failed"),
        }
    }
}

impl From<LampFault> for Error {
    fn from(e: LampFault) -> Self {
        Self::Lamp(e)
    }
}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
