//! Inbound mode events and outbound diagnostic events.
//!
//! [`ModeEvent`]s travel from the input monitor to the controller over the
//! event channel.  [`AppEvent`]s are emitted by the controller through the
//! [`EventSink`](super::ports::EventSink) port; adapters on the other side
//! decide whether to log them, record them, or drop them.

use super::commands::DisplayCommand;
use super::mode::Mode;

/// Produced by the input monitor, consumed by the mode controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeEvent {
    /// One physical press of the mode button.
    ToggleMode,
}

/// Structured events emitted by the mode controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The controller loop has started (carries initial mode).
    Started(Mode),

    /// A toggle was applied.
    ModeChanged { from: Mode, to: Mode, at_ms: u64 },

    /// A normal-cycle phase command was accepted by the display channel.
    PhaseStarted { command: DisplayCommand, at_ms: u64 },

    /// A mode-entry command found the display channel full and will be
    /// retried on the next loop iteration.
    CommandDeferred(DisplayCommand),
}
