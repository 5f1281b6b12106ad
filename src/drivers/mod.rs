//! Lamp and button drivers, hardware initialisation, and task placement.

pub mod button;
pub mod display;
pub mod hw_init;
pub mod lamps;
pub mod task_pin;
