//! Display driver timelines on a virtual clock.

use trafficlight::app::commands::DisplayCommand::{AllBlink, Green, Red, YellowBlink};
use trafficlight::app::commands::LampPattern;
use trafficlight::drivers::display::DisplayDriver;

use crate::mock_hw::{RecordingLamps, ScriptedCommands, SimClock};

const HALF: u32 = 500;

#[test]
fn yellow_blink_toggles_each_half_period_until_red() {
    let clock = SimClock::default();
    let commands = ScriptedCommands::new(&clock, &[(1_700, Red)]);
    let mut driver = DisplayDriver::new(RecordingLamps::new(&clock), commands, HALF);

    assert_eq!(driver.apply(YellowBlink), Some(Red));
    assert_eq!(driver.apply(Red), None);

    assert_eq!(
        driver.lamps().writes,
        vec![
            (0, LampPattern::YELLOW),
            (500, LampPattern::OFF),
            (1_000, LampPattern::YELLOW),
            (1_500, LampPattern::OFF),
            (1_700, LampPattern::OFF),
            (1_700, LampPattern::RED),
        ]
    );
}

#[test]
fn all_blink_moves_every_lamp_together() {
    let clock = SimClock::default();
    let commands = ScriptedCommands::new(&clock, &[(2_200, Green)]);
    let mut driver = DisplayDriver::new(RecordingLamps::new(&clock), commands, HALF);

    assert_eq!(driver.apply(AllBlink), Some(Green));
    for &(_, pattern) in &driver.lamps().writes {
        assert!(
            pattern == LampPattern::ALL || pattern == LampPattern::OFF,
            "lamps out of lockstep: {pattern:?}"
        );
    }
}

#[test]
fn blink_is_preempted_within_one_half_period() {
    for arrive_at in [1, 250, 499, 500, 501, 999, 3_333] {
        let clock = SimClock::default();
        let commands = ScriptedCommands::new(&clock, &[(arrive_at, Red)]);
        let mut driver = DisplayDriver::new(RecordingLamps::new(&clock), commands, HALF);

        assert_eq!(driver.apply(YellowBlink), Some(Red));
        assert!(clock.now() - arrive_at <= u64::from(HALF));
        driver.apply(Red);
        assert_eq!(driver.pattern(), LampPattern::RED);
    }
}

#[test]
fn blink_to_blink_restarts_with_lamps_lit() {
    let clock = SimClock::default();
    let commands = ScriptedCommands::new(&clock, &[(700, AllBlink), (1_300, YellowBlink)]);
    let mut driver = DisplayDriver::new(RecordingLamps::new(&clock), commands, HALF);

    assert_eq!(driver.apply(YellowBlink), Some(AllBlink));
    assert_eq!(driver.apply(AllBlink), Some(YellowBlink));

    let all_blink: Vec<_> = driver
        .lamps()
        .writes
        .iter()
        .copied()
        .filter(|&(t, _)| t >= 700)
        .collect();
    assert_eq!(
        all_blink,
        vec![
            (700, LampPattern::OFF),
            (700, LampPattern::ALL),
            (1_200, LampPattern::OFF),
            (1_300, LampPattern::OFF),
        ]
    );
}
