//! GPIO assignments for the signal head controller board.
//!
//! Single source of truth for the wiring.  [`hw_init`](crate::drivers::hw_init)
//! claims exactly these pins.

// ---------------------------------------------------------------------------
// Lamp outputs (active HIGH, one driver transistor per lamp)
// ---------------------------------------------------------------------------

pub const LED_RED_GPIO: i32 = 25;
pub const LED_YELLOW_GPIO: i32 = 26;
pub const LED_GREEN_GPIO: i32 = 27;

// ---------------------------------------------------------------------------
// Mode button (active-low, internal pull-up)
// ---------------------------------------------------------------------------

/// Momentary push-button that cycles Normal → Night → Maintenance.
/// Shares the BOOT strapping pin on common dev boards.
pub const MODE_BUTTON_GPIO: i32 = 0;
