//! Full pipeline on real threads: button → monitor → controller → driver.
//!
//! Timings are shrunk so each test finishes in well under a second.  The
//! spawned tasks loop forever and are abandoned when the test returns.

use std::thread::sleep;
use std::time::Duration;

use trafficlight::adapters::channels::{ChannelEnds, SignalChannels};
use trafficlight::adapters::time::SystemClock;
use trafficlight::app::commands::LampPattern;
use trafficlight::app::controller::ModeController;
use trafficlight::app::ports::NullSink;
use trafficlight::config::SignalConfig;
use trafficlight::drivers::button::InputMonitor;
use trafficlight::drivers::display::DisplayDriver;
use trafficlight::drivers::task_pin::{CONTROLLER_TASK, DISPLAY_TASK, INPUT_TASK, spawn_task};

use crate::mock_hw::{SharedButton, SharedLamps};

const SETTLE_MS: u128 = 120;

fn fast_config() -> SignalConfig {
    SignalConfig {
        red_time_ms: 150,
        green_time_ms: 150,
        yellow_time_ms: 50,
        blink_half_period_ms: 40,
        poll_interval_ms: 10,
        input_sample_interval_ms: 10,
    }
}

fn start_signal() -> (SharedButton, SharedLamps) {
    let config = fast_config();
    let button = SharedButton::released();
    let lamps = SharedLamps::new();
    let ChannelEnds {
        event_tx,
        event_rx,
        display_tx,
        display_rx,
    } = SignalChannels::new().split();

    let driver_lamps = lamps.clone();
    let half = config.blink_half_period_ms;
    spawn_task(DISPLAY_TASK, move || {
        DisplayDriver::new(driver_lamps, display_rx, half).run();
    })
    .unwrap();

    let ctl_config = config.clone();
    spawn_task(CONTROLLER_TASK, move || {
        ModeController::new(ctl_config, event_rx, display_tx, SystemClock::new(), NullSink).run();
    })
    .unwrap();

    let pin = button.clone();
    let sample = config.input_sample_interval_ms;
    spawn_task(INPUT_TASK, move || {
        InputMonitor::new(pin, event_tx, SystemClock::new(), sample).run();
    })
    .unwrap();

    (button, lamps)
}

fn press(button: &SharedButton) {
    button.set_pressed(true);
    sleep(Duration::from_millis(40));
    button.set_pressed(false);
}

#[test]
fn boots_into_normal_cycle() {
    let (_button, lamps) = start_signal();
    sleep(Duration::from_millis(600));

    let seen = lamps.since(0);
    assert_eq!(seen.first(), Some(&LampPattern::OFF));
    for expected in [LampPattern::RED, LampPattern::GREEN, LampPattern::YELLOW] {
        assert!(seen.contains(&expected), "{expected:?} never shown");
    }
    assert!(seen.iter().all(|p| p.lit_count() <= 1));
}

#[test]
fn button_presses_cycle_through_blink_modes() {
    let (button, lamps) = start_signal();
    sleep(Duration::from_millis(60));

    press(&button);
    let night_from = lamps.elapsed_ms() + SETTLE_MS;
    sleep(Duration::from_millis(400));
    let night = lamps.since(night_from);
    assert!(night.contains(&LampPattern::YELLOW));
    assert!(night.contains(&LampPattern::OFF));
    assert!(
        night
            .iter()
            .all(|&p| p == LampPattern::YELLOW || p == LampPattern::OFF)
    );

    press(&button);
    let maintenance_from = lamps.elapsed_ms() + SETTLE_MS;
    sleep(Duration::from_millis(400));
    let maintenance = lamps.since(maintenance_from);
    assert!(maintenance.contains(&LampPattern::ALL));
    assert!(
        maintenance
            .iter()
            .all(|&p| p == LampPattern::ALL || p == LampPattern::OFF)
    );

    press(&button);
    let normal_from = lamps.elapsed_ms() + SETTLE_MS;
    sleep(Duration::from_millis(400));
    let normal = lamps.since(normal_from);
    assert!(normal.contains(&LampPattern::RED));
    assert!(normal.iter().all(|p| p.lit_count() == 1));
    assert_eq!(lamps.last().map(|p| p.lit_count()), Some(1));
}
