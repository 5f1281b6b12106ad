//! Red / yellow / green lamp outputs.
//!
//! Three push-pull outputs, active HIGH.  Generic over `embedded-hal`
//! output pins so the same driver runs on ESP-IDF `PinDriver`s and on
//! host-side test doubles.

use embedded_hal::digital::{OutputPin, PinState};

use crate::app::commands::LampPattern;
use crate::app::ports::LampOutputs;
use crate::error::{LampFault, Result};

pub struct SignalLamps<R, Y, G> {
    red: R,
    yellow: Y,
    green: G,
}

impl<R, Y, G> SignalLamps<R, Y, G>
where
    R: OutputPin,
    Y: OutputPin,
    G: OutputPin,
{
    pub fn new(red: R, yellow: Y, green: G) -> Self {
        Self { red, yellow, green }
    }

    /// Give the pins back (used by tests to inspect final levels).
    pub fn release(self) -> (R, Y, G) {
        (self.red, self.yellow, self.green)
    }
}

impl<R, Y, G> LampOutputs for SignalLamps<R, Y, G>
where
    R: OutputPin,
    Y: OutputPin,
    G: OutputPin,
{
    fn show(&mut self, pattern: LampPattern) -> Result<()> {
        drive(&mut self.red, pattern.red).map_err(|_| LampFault::Red)?;
        drive(&mut self.yellow, pattern.yellow).map_err(|_| LampFault::Yellow)?;
        drive(&mut self.green, pattern.green).map_err(|_| LampFault::Green)?;
        Ok(())
    }
}

fn drive<P: OutputPin>(pin: &mut P, on: bool) -> core::result::Result<(), P::Error> {
    pin.set_state(PinState::from(on))
}
