//! Display commands and the lamp patterns they map to.
//!
//! A [`DisplayCommand`] is a *request* from the controller.  Only the
//! [`DisplayDriver`](crate::drivers::display::DisplayDriver) decides what is
//! actually lit, expressed as a [`LampPattern`].

/// Instruction describing which lamp pattern the driver should show next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DisplayCommand {
    Red = 0,
    Yellow = 1,
    Green = 2,
    /// Flash yellow only (night mode).
    YellowBlink = 3,
    /// Flash all three lamps in lockstep (maintenance mode).
    AllBlink = 4,
}

impl DisplayCommand {
    /// The single lamp lit for a steady command, `None` for blink commands.
    pub const fn steady_pattern(self) -> Option<LampPattern> {
        match self {
            Self::Red => Some(LampPattern::RED),
            Self::Yellow => Some(LampPattern::YELLOW),
            Self::Green => Some(LampPattern::GREEN),
            Self::YellowBlink | Self::AllBlink => None,
        }
    }

    /// Lamps lit during the "on" half of a blink command.
    pub const fn blink_pattern(self) -> Option<LampPattern> {
        match self {
            Self::YellowBlink => Some(LampPattern::YELLOW),
            Self::AllBlink => Some(LampPattern::ALL),
            Self::Red | Self::Yellow | Self::Green => None,
        }
    }
}

/// Output level of each of the three lamp lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LampPattern {
    pub red: bool,
    pub yellow: bool,
    pub green: bool,
}

impl LampPattern {
    pub const OFF: Self = Self::new(false, false, false);
    pub const RED: Self = Self::new(true, false, false);
    pub const YELLOW: Self = Self::new(false, true, false);
    pub const GREEN: Self = Self::new(false, false, true);
    pub const ALL: Self = Self::new(true, true, true);

    pub const fn new(red: bool, yellow: bool, green: bool) -> Self {
        Self { red, yellow, green }
    }

    /// Number of lamps lit.
    pub fn lit_count(self) -> usize {
        [self.red, self.yellow, self.green]
            .iter()
            .filter(|on| **on)
            .count()
    }
}
