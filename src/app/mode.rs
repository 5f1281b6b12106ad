//! Operating mode of the signal.
//!
//! Owned exclusively by the [`ModeController`](super::controller::ModeController).
//! Every other component only ever sees the display commands it produces.

use super::commands::DisplayCommand;

/// Top-level operating posture.
///
/// The press cycle is `Normal → Night → Maintenance → Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Mode {
    /// Timed red → green → yellow cycle.
    #[default]
    Normal = 0,
    /// Yellow flashing, red and green dark.
    Night = 1,
    /// All three lamps flashing together.
    Maintenance = 2,
}

impl Mode {
    /// Number of modes in the press cycle.
    pub const COUNT: usize = 3;

    /// The mode one button press away.
    pub const fn next(self) -> Self {
        match self {
            Self::Normal => Self::Night,
            Self::Night => Self::Maintenance,
            Self::Maintenance => Self::Normal,
        }
    }

    /// Mode reached from `self` after `presses` toggles.
    pub fn advanced_by(self, presses: usize) -> Self {
        (0..presses % Self::COUNT).fold(self, |mode, _| mode.next())
    }

    /// Command sent once when the mode is entered.
    ///
    /// `Normal` has none: its timed cycle re-asserts `Red` on the next pass.
    pub const fn entry_command(self) -> Option<DisplayCommand> {
        match self {
            Self::Normal => None,
            Self::Night => Some(DisplayCommand::YellowBlink),
            Self::Maintenance => Some(DisplayCommand::AllBlink),
        }
    }
}
