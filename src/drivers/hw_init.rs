//! One-shot hardware peripheral initialisation.
//!
//! Claims the three lamp outputs and the mode button input from the
//! ESP-IDF HAL and wraps them in the crate's `embedded-hal`-generic
//! drivers.  Called once from `main()` before any task is spawned.

#[cfg(target_os = "espidf")]
use esp_idf_hal::gpio::{Gpio0, Gpio25, Gpio26, Gpio27, Input, Output, PinDriver, Pull};
#[cfg(target_os = "espidf")]
use esp_idf_hal::peripherals::Peripherals;
#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::drivers::lamps::SignalLamps;
#[cfg(target_os = "espidf")]
use crate::error::{Error, Result};
#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(target_os = "espidf")]
pub type BoardLamps = SignalLamps<
    PinDriver<'static, Gpio25, Output>,
    PinDriver<'static, Gpio26, Output>,
    PinDriver<'static, Gpio27, Output>,
>;

#[cfg(target_os = "espidf")]
pub type ModeButton = PinDriver<'static, Gpio0, Input>;

/// Every peripheral the signal tasks need, already configured.
#[cfg(target_os = "espidf")]
pub struct Board {
    pub lamps: BoardLamps,
    pub button: ModeButton,
}

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<Board> {
    let p = Peripherals::take().map_err(|_| Error::Init("peripherals already taken"))?;

    let mut red = PinDriver::output(p.pins.gpio25).map_err(|_| Error::Init("red lamp GPIO"))?;
    let mut yellow =
        PinDriver::output(p.pins.gpio26).map_err(|_| Error::Init("yellow lamp GPIO"))?;
    let mut green =
        PinDriver::output(p.pins.gpio27).map_err(|_| Error::Init("green lamp GPIO"))?;
    for lamp in [red.set_low(), yellow.set_low(), green.set_low()] {
        lamp.map_err(|_| Error::Init("lamp GPIO level"))?;
    }
    info!(
        "hw_init: lamps on GPIO {}/{}/{} (R/Y/G)",
        pins::LED_RED_GPIO,
        pins::LED_YELLOW_GPIO,
        pins::LED_GREEN_GPIO
    );

    let mut button = PinDriver::input(p.pins.gpio0).map_err(|_| Error::Init("button GPIO"))?;
    button
        .set_pull(Pull::Up)
        .map_err(|_| Error::Init("button pull-up"))?;
    info!("hw_init: mode button on GPIO {} (active-low)", pins::MODE_BUTTON_GPIO);

    Ok(Board {
        lamps: SignalLamps::new(red, yellow, green),
        button,
    })
}
