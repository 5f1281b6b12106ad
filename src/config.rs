//! Signal timing configuration.
//!
//! All values are fixed at startup.  The firmware uses
//! [`SignalConfig::default()`] unless a JSON override was baked in at build
//! time through the `SIGNAL_CONFIG_JSON` environment variable.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Display channel depth.  One slot: the driver always works from the latest
/// command, never a backlog.
pub const DISPLAY_CHANNEL_DEPTH: usize = 1;

/// Event channel depth.  Slack for bursts of button presses while the
/// controller is mid-cycle.
pub const EVENT_CHANNEL_DEPTH: usize = 5;

/// Phase durations and polling cadences, all in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    // --- Normal cycle ---
    pub red_time_ms: u32,
    pub green_time_ms: u32,
    pub yellow_time_ms: u32,

    // --- Degraded modes ---
    /// Half of one blink period (lamp on for this long, then off for this long).
    pub blink_half_period_ms: u32,

    // --- Cadences ---
    /// Event polling granularity of the mode controller.
    pub poll_interval_ms: u32,
    /// Sampling cadence of the mode button.
    pub input_sample_interval_ms: u32,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            red_time_ms: 100_000,
            green_time_ms: 100_000,
            yellow_time_ms: 5_000,

            blink_half_period_ms: 500,

            poll_interval_ms: 50,
            input_sample_interval_ms: 50,
        }
    }
}

impl SignalConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed JSON"))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the control loops cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.red_time_ms == 0 || self.green_time_ms == 0 || self.yellow_time_ms == 0 {
            return Err(Error::Config("phase durations must be non-zero"));
        }
        if self.blink_half_period_ms == 0 {
            return Err(Error::Config("blink half-period must be non-zero"));
        }
        if self.poll_interval_ms == 0 || self.input_sample_interval_ms == 0 {
            return Err(Error::Config("polling intervals must be non-zero"));
        }
        if self.poll_interval_ms > self.shortest_phase_ms() {
            return Err(Error::Config("poll interval exceeds shortest phase"));
        }
        Ok(())
    }

    fn shortest_phase_ms(&self) -> u32 {
        self.red_time_ms.min(self.green_time_ms).min(self.yellow_time_ms)
    }
}
