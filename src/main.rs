//! Traffic Signal Firmware — Main Entry Point
//!
//! Three tasks connected by two bounded channels.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                                                                │
//! │   GPIO0 ──▶ InputMonitor ──ModeEvent (5)──▶ ModeController     │
//! │                                                 │              │
//! │                                   DisplayCommand (1)           │
//! │                                                 ▼              │
//! │             GPIO25/26/27 ◀── SignalLamps ◀── DisplayDriver     │
//! │                                                                │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{info, warn};

use trafficlight::adapters::channels::{ChannelEnds, SignalChannels};
use trafficlight::adapters::log_sink::LogEventSink;
use trafficlight::adapters::time::SystemClock;
use trafficlight::app::controller::ModeController;
use trafficlight::config::SignalConfig;
use trafficlight::drivers::button::InputMonitor;
use trafficlight::drivers::display::DisplayDriver;
use trafficlight::drivers::hw_init;
use trafficlight::drivers::task_pin::{self, CONTROLLER_TASK, DISPLAY_TASK, INPUT_TASK};

fn load_config() -> SignalConfig {
    let Some(json) = option_env!("SIGNAL_CONFIG_JSON") else {
        info!("Config: built-in defaults");
        return SignalConfig::default();
    };
    match SignalConfig::from_json(json) {
        Ok(config) => {
            info!("Config: build-time override applied");
            config
        }
        Err(e) => {
            warn!("Config: override rejected ({}), using defaults", e);
            SignalConfig::default()
        }
    }
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Traffic signal v{}                ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Config + hardware ──────────────────────────────────
    let config = load_config();
    let board = hw_init::init_peripherals()?;

    // ── 3. Channels ───────────────────────────────────────────
    let ChannelEnds {
        event_tx,
        event_rx,
        display_tx,
        display_rx,
    } = SignalChannels::new().split();

    // ── 4. Tasks ──────────────────────────────────────────────
    // Display first so the lamps are blanked before any command arrives.
    let half_period_ms = config.blink_half_period_ms;
    let lamps = board.lamps;
    let display = task_pin::spawn_task(DISPLAY_TASK, move || {
        DisplayDriver::new(lamps, display_rx, half_period_ms).run();
    })?;

    let controller_config = config.clone();
    let controller = task_pin::spawn_task(CONTROLLER_TASK, move || {
        ModeController::new(
            controller_config,
            event_rx,
            display_tx,
            SystemClock::new(),
            LogEventSink::new(),
        )
        .run();
    })?;

    let sample_interval_ms = config.input_sample_interval_ms;
    let button = board.button;
    let input = task_pin::spawn_task(INPUT_TASK, move || {
        InputMonitor::new(button, event_tx, SystemClock::new(), sample_interval_ms).run();
    })?;

    info!("All tasks running");

    // The tasks never return; joining keeps `main` alive on the idle path.
    for handle in [display, controller, input] {
        if handle.join().is_err() {
            log::error!("A signal task panicked");
        }
    }
    Ok(())
}
