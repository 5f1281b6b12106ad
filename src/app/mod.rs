//! Signal core — pure coordination logic, zero I/O.
//!
//! The mode vocabulary, the message types carried by the two channels, and
//! the [`ModeController`](controller::ModeController).  All interaction with
//! hardware, threads and time happens through the **port traits** in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod commands;
pub mod controller;
pub mod events;
pub mod mode;
pub mod ports;
