//! Display driver — turns display commands into lamp levels.
//!
//! ## State machine
//!
//! | Command       | Lamps                                  | Leaves when                |
//! |---------------|----------------------------------------|----------------------------|
//! | `Red`         | red on, others off                     | next command (blocking)    |
//! | `Yellow`      | yellow on, others off                  | next command (blocking)    |
//! | `Green`       | green on, others off                   | next command (blocking)    |
//! | `YellowBlink` | yellow toggles every half-period       | a command arrives mid-wait |
//! | `AllBlink`    | all three toggle together              | a command arrives mid-wait |
//!
//! A blink sub-loop hands the command that ended it back to the caller,
//! which dispatches it exactly as if it had just been received.  The driver
//! knows nothing about modes and never writes to a channel.

use log::{debug, info, warn};

use crate::app::commands::{DisplayCommand, LampPattern};
use crate::app::ports::{CommandRx, LampOutputs};

pub struct DisplayDriver<L, R> {
    lamps: L,
    commands: R,
    half_period_ms: u32,
    pattern: LampPattern,
}

impl<L, R> DisplayDriver<L, R>
where
    L: LampOutputs,
    R: CommandRx,
{
    pub fn new(lamps: L, commands: R, half_period_ms: u32) -> Self {
        Self {
            lamps,
            commands,
            half_period_ms,
            pattern: LampPattern::OFF,
        }
    }

    /// Last pattern written to the lamps.
    pub fn pattern(&self) -> LampPattern {
        self.pattern
    }

    pub fn lamps(&self) -> &L {
        &self.lamps
    }

    /// Blank the lamps, then dispatch commands forever.
    pub fn run(&mut self) {
        info!("Display: started (blink half-period {}ms)", self.half_period_ms);
        self.show(LampPattern::OFF);

        let mut pending = None;
        loop {
            let command = match pending.take() {
                Some(command) => command,
                None => self.commands.recv(),
            };
            pending = self.apply(command);
        }
    }

    /// Dispatch one command.
    ///
    /// Steady commands set the lamps and return `None`; the caller then
    /// blocks for the next command.  Blink commands run until superseded and
    /// return the superseding command.
    pub fn apply(&mut self, command: DisplayCommand) -> Option<DisplayCommand> {
        debug!("Display: {:?}", command);
        if let Some(steady) = command.steady_pattern() {
            self.show(steady);
            return None;
        }
        command.blink_pattern().map(|lit| self.blink(lit))
    }

    /// Toggle `lit` on and off every half-period until a command arrives.
    fn blink(&mut self, lit: LampPattern) -> DisplayCommand {
        let mut on = true;
        loop {
            self.show(if on { lit } else { LampPattern::OFF });
            if let Some(next) = self.commands.recv_timeout(self.half_period_ms) {
                self.show(LampPattern::OFF);
                return next;
            }
            on = !on;
        }
    }

    fn show(&mut self, pattern: LampPattern) {
        match self.lamps.show(pattern) {
            Ok(()) => self.pattern = pattern,
            Err(e) => warn!("Display: {}", e),
        }
    }
}
