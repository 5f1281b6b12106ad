//! Port traits — the boundary between signal logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ModeController / DisplayDriver
//! ```
//!
//! The controller and driver are generic over these traits, so neither
//! touches GPIO registers, threads, or the system clock directly.  On the
//! device they are backed by `embassy-sync` channels and `embedded-hal`
//! pins; in tests by a virtual clock and scripted queues.

use crate::error::Result;

use super::commands::{DisplayCommand, LampPattern};
use super::events::{AppEvent, ModeEvent};

// ───────────────────────────────────────────────────────────────
// Lamp output port (driven adapter: driver → lamp lines)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the three lamp lines.
pub trait LampOutputs {
    /// Drive all three lines to the levels in `pattern`.
    fn show(&mut self, pattern: LampPattern) -> Result<()>;
}

// ───────────────────────────────────────────────────────────────
// Display channel ports
// ───────────────────────────────────────────────────────────────

/// Producer end of the display channel (held by the controller).
pub trait CommandTx {
    /// Block until the channel accepts `command`.
    fn send(&mut self, command: DisplayCommand);

    /// Enqueue `command` only if there is room.  Returns `false` if it was
    /// dropped because the channel is full.
    fn try_send(&mut self, command: DisplayCommand) -> bool;
}

/// Consumer end of the display channel (held by the display driver).
pub trait CommandRx {
    /// Block until a command arrives.
    fn recv(&mut self) -> DisplayCommand;

    /// Wait at most `timeout_ms` for a command.
    fn recv_timeout(&mut self, timeout_ms: u32) -> Option<DisplayCommand>;
}

// ───────────────────────────────────────────────────────────────
// Event channel ports
// ───────────────────────────────────────────────────────────────

/// Producer end of the event channel (held by the input monitor).
pub trait EventTx {
    /// Block until the channel accepts `event`.
    fn send(&mut self, event: ModeEvent);
}

/// Consumer end of the event channel (held by the controller).
pub trait EventRx {
    /// Take the oldest pending event without blocking.
    fn try_recv(&mut self) -> Option<ModeEvent>;
}

// ───────────────────────────────────────────────────────────────
// Time port
// ───────────────────────────────────────────────────────────────

/// Monotonic time and task suspension.
pub trait Clock {
    /// Milliseconds since boot.
    fn uptime_ms(&self) -> u64;

    /// Suspend the calling task for `ms` milliseconds.
    fn sleep_ms(&self, ms: u32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: controller → diagnostics)
// ───────────────────────────────────────────────────────────────

/// Diagnostic output.  Not required for correctness; may discard everything.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &AppEvent) {}
}
