//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing controller events to the `log`
//! facade (UART / USB-CDC on the device, whatever logger the host installs
//! in tests).  Mode changes are also kept in a [`TransitionLog`].

use log::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::diagnostics::{ModeTransition, TransitionLog};

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink {
    transitions: TransitionLog,
}

impl LogEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transitions(&self) -> &TransitionLog {
        &self.transitions
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match *event {
            AppEvent::Started(mode) => {
                info!("START | initial_mode={:?}", mode);
            }
            AppEvent::ModeChanged { from, to, at_ms } => {
                info!("MODE  | {:?} -> {:?} @ {}ms", from, to, at_ms);
                self.transitions.record(ModeTransition { from, to, at_ms });
            }
            AppEvent::PhaseStarted { command, at_ms } => {
                debug!("PHASE | {:?} @ {}ms", command, at_ms);
            }
            AppEvent::CommandDeferred(command) => {
                warn!("DEFER | {:?} (display channel full)", command);
            }
        }
    }
}
