//! Mode controller timelines on a virtual clock.

use trafficlight::app::commands::DisplayCommand::{self, AllBlink, Green, Red, Yellow, YellowBlink};
use trafficlight::app::controller::ModeController;
use trafficlight::app::events::AppEvent;
use trafficlight::app::mode::Mode;
use trafficlight::config::SignalConfig;

use crate::mock_hw::{RecordingDisplay, RecordingSink, ScriptedEvents, SimClock};

type Controller = ModeController<ScriptedEvents, RecordingDisplay, SimClock, RecordingSink>;

struct Rig {
    clock: SimClock,
    display: RecordingDisplay,
    sink: RecordingSink,
    ctl: Controller,
}

impl Rig {
    fn new(presses_at_ms: &[u64]) -> Self {
        let config = SignalConfig {
            red_time_ms: 3_000,
            green_time_ms: 3_000,
            yellow_time_ms: 1_000,
            ..SignalConfig::default()
        };
        let clock = SimClock::default();
        let display = RecordingDisplay::new(&clock);
        let sink = RecordingSink::default();
        let ctl = ModeController::new(
            config,
            ScriptedEvents::new(&clock, presses_at_ms),
            display.clone(),
            clock.clone(),
            sink.clone(),
        );
        Self {
            clock,
            display,
            sink,
            ctl,
        }
    }

    fn run_until(&mut self, at_ms: u64) {
        while self.clock.now() < at_ms {
            self.ctl.iterate();
        }
    }

    fn sent_before(&self, at_ms: u64) -> Vec<(u64, DisplayCommand)> {
        self.display
            .stamped()
            .into_iter()
            .filter(|&(t, _)| t < at_ms)
            .collect()
    }
}

#[test]
fn normal_cycle_follows_configured_durations() {
    let mut rig = Rig::new(&[]);
    rig.run_until(7_001);
    assert_eq!(
        rig.sent_before(7_001),
        vec![(0, Red), (3_000, Green), (6_000, Yellow), (7_000, Red)]
    );
    assert_eq!(rig.ctl.mode(), Mode::Normal);
}

#[test]
fn press_during_red_switches_to_yellow_blink() {
    let mut rig = Rig::new(&[500]);
    rig.run_until(10_000);

    assert_eq!(rig.display.stamped(), vec![(0, Red), (500, YellowBlink)]);
    assert_eq!(rig.ctl.mode(), Mode::Night);
    assert!(rig.sink.0.borrow().contains(&AppEvent::ModeChanged {
        from: Mode::Normal,
        to: Mode::Night,
        at_ms: 500,
    }));
}

#[test]
fn press_during_green_abandons_rest_of_cycle() {
    let mut rig = Rig::new(&[4_000]);
    rig.run_until(8_000);
    assert_eq!(
        rig.display.stamped(),
        vec![(0, Red), (3_000, Green), (4_000, YellowBlink)]
    );
}

#[test]
fn mode_change_reaches_display_within_one_poll_interval() {
    for press_at in (1..6_900).step_by(173) {
        let mut rig = Rig::new(&[press_at]);
        rig.run_until(press_at + 200);

        let (blink_at, _) = rig
            .display
            .stamped()
            .into_iter()
            .find(|&(_, c)| c == YellowBlink)
            .unwrap();
        assert!(blink_at >= press_at);
        assert!(
            blink_at - press_at <= 50,
            "press at {press_at}ms shown at {blink_at}ms"
        );
        assert!(
            rig.display
                .stamped()
                .iter()
                .all(|&(t, c)| t < press_at || c == YellowBlink),
            "no normal phase after the press"
        );
    }
}

#[test]
fn three_presses_walk_every_mode() {
    let mut rig = Rig::new(&[500, 2_000, 4_000]);
    rig.run_until(4_001);
    assert_eq!(
        rig.sent_before(4_001),
        vec![(0, Red), (500, YellowBlink), (2_000, AllBlink), (4_000, Red)]
    );
    assert_eq!(rig.ctl.mode(), Mode::Normal);
}

#[test]
fn burst_of_presses_skips_to_final_mode() {
    let mut rig = Rig::new(&[500, 500]);
    rig.run_until(1_000);
    assert_eq!(rig.display.stamped(), vec![(0, Red), (500, AllBlink)]);
    assert_eq!(rig.ctl.mode(), Mode::Maintenance);
}

#[test]
fn started_is_emitted_once() {
    let mut rig = Rig::new(&[100]);
    rig.run_until(2_000);
    let starts = rig
        .sink
        .0
        .borrow()
        .iter()
        .filter(|e| matches!(e, AppEvent::Started(_)))
        .count();
    assert_eq!(starts, 1);
}
