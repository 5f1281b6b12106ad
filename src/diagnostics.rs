//! Runtime diagnostics.
//!
//! Keeps the most recent mode transitions in a fixed-size ring so they can
//! be dumped over the console after the fact without any heap growth.

use heapless::HistoryBuffer;

use crate::app::mode::Mode;

const TRANSITION_SLOTS: usize = 8;

/// One applied toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTransition {
    pub from: Mode,
    pub to: Mode,
    pub at_ms: u64,
}

/// Ring of the last few transitions plus a running total.
#[derive(Default)]
pub struct TransitionLog {
    recent: HistoryBuffer<ModeTransition, TRANSITION_SLOTS>,
    total: u32,
}

impl TransitionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, transition: ModeTransition) {
        self.recent.write(transition);
        self.total = self.total.wrapping_add(1);
    }

    /// Retained transitions, oldest first.
    pub fn recent(&self) -> impl Iterator<Item = &ModeTransition> + '_ {
        self.recent.oldest_ordered()
    }

    pub fn last(&self) -> Option<&ModeTransition> {
        self.recent.recent()
    }

    /// Transitions recorded since boot, including ones no longer retained.
    pub fn total(&self) -> u32 {
        self.total
    }
}
