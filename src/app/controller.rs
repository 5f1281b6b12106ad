//! Mode controller — owns the operating mode and the normal timing cycle.
//!
//! ```text
//!  EventRx ──▶ ┌──────────────────────────┐ ──▶ CommandTx
//!              │      ModeController      │
//!    Clock ◀──▶│  mode · cycle · delays   │ ──▶ EventSink
//!              └──────────────────────────┘
//! ```
//!
//! One loop iteration:
//!
//! 1. Drain the event channel, advancing the mode once per `ToggleMode`.
//! 2. If the mode differs from the last one announced to the driver, send
//!    its entry command without blocking.  A full channel defers the send
//!    to the next iteration.
//! 3. In `Normal`, run one red → green → yellow pass.  Each phase waits
//!    through [`ModeController::interruptible_delay`]; a toggle observed
//!    mid-phase is applied at once and the rest of the pass is abandoned.
//! 4. Otherwise sleep one polling interval.

use log::{debug, info, warn};

use crate::config::SignalConfig;

use super::commands::DisplayCommand;
use super::events::{AppEvent, ModeEvent};
use super::mode::Mode;
use super::ports::{Clock, CommandTx, EventRx, EventSink};

/// How an [`interruptible_delay`](ModeController::interruptible_delay) ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayOutcome {
    /// The full duration passed without a mode event.
    Elapsed,
    /// A mode event arrived; the mode has already been advanced.
    Interrupted,
}

pub struct ModeController<E, D, C, S> {
    events: E,
    display: D,
    clock: C,
    sink: S,
    config: SignalConfig,
    mode: Mode,
    /// Last mode whose entry the display driver has been told about.
    announced: Mode,
    started: bool,
}

impl<E, D, C, S> ModeController<E, D, C, S>
where
    E: EventRx,
    D: CommandTx,
    C: Clock,
    S: EventSink,
{
    /// Build a controller in `Normal` mode.  Nothing is sent until the first
    /// [`iterate`](Self::iterate).
    pub fn new(config: SignalConfig, events: E, display: D, clock: C, sink: S) -> Self {
        Self {
            events,
            display,
            clock,
            sink,
            config,
            mode: Mode::Normal,
            announced: Mode::Normal,
            started: false,
        }
    }

    /// Current operating mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Run the control loop forever.
    pub fn run(&mut self) {
        info!(
            "Controller: started (red={}ms green={}ms yellow={}ms poll={}ms)",
            self.config.red_time_ms,
            self.config.green_time_ms,
            self.config.yellow_time_ms,
            self.config.poll_interval_ms
        );
        loop {
            self.iterate();
        }
    }

    /// One pass of the control protocol.
    pub fn iterate(&mut self) {
        if !self.started {
            self.started = true;
            self.sink.emit(&AppEvent::Started(self.mode));
        }

        while let Some(event) = self.events.try_recv() {
            self.apply(event);
        }

        self.announce_mode();

        if self.mode == Mode::Normal {
            self.run_normal_cycle();
        } else {
            self.clock.sleep_ms(self.config.poll_interval_ms);
        }
    }

    /// Wait `duration_ms`, checking the event channel every polling interval.
    ///
    /// A `ToggleMode` seen mid-wait is applied immediately and the wait
    /// returns [`DelayOutcome::Interrupted`].  Further pending events stay
    /// queued for the next top-level poll.
    pub fn interruptible_delay(&mut self, duration_ms: u32) -> DelayOutcome {
        let start = self.clock.uptime_ms();
        let duration = u64::from(duration_ms);
        loop {
            if let Some(event) = self.events.try_recv() {
                self.apply(event);
                return DelayOutcome::Interrupted;
            }
            let elapsed = self.clock.uptime_ms().saturating_sub(start);
            if elapsed >= duration {
                return DelayOutcome::Elapsed;
            }
            let remaining = (duration - elapsed).min(u64::from(u32::MAX)) as u32;
            self.clock.sleep_ms(self.config.poll_interval_ms.min(remaining));
        }
    }

    fn apply(&mut self, event: ModeEvent) {
        match event {
            ModeEvent::ToggleMode => {
                let from = self.mode;
                self.mode = from.next();
                let at_ms = self.clock.uptime_ms();
                info!("Controller: mode {:?} -> {:?}", from, self.mode);
                self.sink.emit(&AppEvent::ModeChanged {
                    from,
                    to: self.mode,
                    at_ms,
                });
            }
        }
    }

    /// Tell the driver about a mode change without ever blocking on it.
    fn announce_mode(&mut self) {
        if self.mode == self.announced {
            return;
        }
        match self.mode.entry_command() {
            None => self.announced = self.mode,
            Some(command) => {
                if self.display.try_send(command) {
                    self.announced = self.mode;
                } else {
                    warn!("Controller: display busy, deferring {:?}", command);
                    self.sink.emit(&AppEvent::CommandDeferred(command));
                }
            }
        }
    }

    fn run_normal_cycle(&mut self) {
        let phases = [
            (DisplayCommand::Red, self.config.red_time_ms),
            (DisplayCommand::Green, self.config.green_time_ms),
            (DisplayCommand::Yellow, self.config.yellow_time_ms),
        ];
        for (command, duration_ms) in phases {
            self.display.send(command);
            let at_ms = self.clock.uptime_ms();
            debug!("Controller: {:?} for {}ms", command, duration_ms);
            self.sink.emit(&AppEvent::PhaseStarted { command, at_ms });

            if self.interruptible_delay(duration_ms) == DelayOutcome::Interrupted {
                return;
            }
        }
    }
}
