//! Mode button monitor.
//!
//! ## Hardware
//!
//! Active-low momentary switch with pull-up.  The line idles HIGH and
//! reads LOW while pressed.
//!
//! ## Detection
//!
//! The line is sampled at a fixed cadence (50ms by default, which also
//! rides over contact bounce).  Exactly one `ToggleMode` is emitted per
//! observed HIGH → LOW transition; holding the button emits nothing more,
//! and releasing it emits nothing.

use embedded_hal::digital::InputPin;
use log::{info, warn};

use crate::app::events::ModeEvent;
use crate::app::ports::{Clock, EventTx};

/// Falling-edge detector over sampled line levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeDetector {
    last_high: bool,
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeDetector {
    /// Starts as released, so a button held through boot only counts once
    /// it has been let go and pressed again.
    pub const fn new() -> Self {
        Self { last_high: false }
    }

    /// Feed one sample.  Returns an event on a HIGH → LOW transition.
    pub fn sample(&mut self, high: bool) -> Option<ModeEvent> {
        let fell = self.last_high && !high;
        self.last_high = high;
        fell.then_some(ModeEvent::ToggleMode)
    }
}

pub struct InputMonitor<P, T, C> {
    pin: P,
    events: T,
    clock: C,
    detector: EdgeDetector,
    sample_interval_ms: u32,
    presses: u32,
}

impl<P, T, C> InputMonitor<P, T, C>
where
    P: InputPin,
    T: EventTx,
    C: Clock,
{
    pub fn new(pin: P, events: T, clock: C, sample_interval_ms: u32) -> Self {
        Self {
            pin,
            events,
            clock,
            detector: EdgeDetector::new(),
            sample_interval_ms,
            presses: 0,
        }
    }

    /// Presses forwarded since start.
    pub fn presses(&self) -> u32 {
        self.presses
    }

    /// Sample forever at the configured cadence.
    pub fn run(&mut self) {
        info!("Button: monitor started ({}ms sampling)", self.sample_interval_ms);
        loop {
            self.poll_once();
            self.clock.sleep_ms(self.sample_interval_ms);
        }
    }

    /// Take one sample and forward any press.  Blocks if the event channel
    /// is full.
    pub fn poll_once(&mut self) -> Option<ModeEvent> {
        let high = match self.pin.is_high() {
            Ok(high) => high,
            Err(e) => {
                warn!("Button: read failed ({:?})", e);
                return None;
            }
        };
        let event = self.detector.sample(high)?;
        self.presses = self.presses.wrapping_add(1);
        info!("Button: press #{} → toggle mode", self.presses);
        self.events.send(event);
        Some(event)
    }
}
