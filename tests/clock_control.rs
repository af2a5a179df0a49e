use ticklabs::application::Surface;
use ticklabs::application::clock_control::{ClockControl, ClockState};
use ticklabs::config::ClockConfig;
use ticklabs::domain::fsm::{TickMachine, TickPeriod};
use ticklabs::domain::geometry::{Color, Panel, TouchPoint};
use ticklabs::domain::input::InputFrame;
use ticklabs::infrastructure::canvas::RecordingCanvas;

const HOURS_UP: TouchPoint = TouchPoint::new(10, 10, 1);
const MINUTES_DOWN: TouchPoint = TouchPoint::new(160, 200, 1);

struct Rig {
    control: ClockControl,
    canvas: RecordingCanvas,
}

impl Rig {
    fn new() -> Self {
        Self {
            control: ClockControl::new(&ClockConfig::default(), TickPeriod::default(), Panel::default()),
            canvas: RecordingCanvas::new(),
        }
    }

    fn tick(&mut self, mut frame: InputFrame) -> InputFrame {
        self.control.tick(&mut Surface {
            input: &mut frame,
            canvas: &mut self.canvas,
        });
        frame
    }

    fn idle(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.tick(InputFrame::idle());
        }
    }

    fn hold(&mut self, at: TouchPoint, ticks: usize) {
        for _ in 0..ticks {
            self.tick(InputFrame::touching(at));
        }
    }

    fn state(&self) -> ClockState {
        self.control.state()
    }

    fn time(&self) -> String {
        self.control.time().to_string()
    }
}

/// Init, one idle tick, then a touch that is held until auto-repeat starts
/// waiting.
fn rig_in_auto_repeat_delay(at: TouchPoint) -> Rig {
    let mut rig = Rig::new();
    rig.idle(2);
    rig.hold(at, 2);
    assert_eq!(rig.state(), ClockState::AutoRepeatDelay);
    rig
}

#[test]
fn test_clock_stays_stopped_until_touched() {
    let mut rig = Rig::new();
    rig.idle(200);
    assert_eq!(rig.state(), ClockState::NeverTouched);
    assert_eq!(rig.time(), "01:00:00");
}

#[test]
fn test_touch_requests_stale_clear() {
    let mut rig = Rig::new();
    rig.idle(2);
    let frame = rig.tick(InputFrame::touching(HOURS_UP));
    assert!(frame.stale_touch_cleared());
    assert_eq!(rig.state(), ClockState::AdcSettling);
}

#[test]
fn test_short_tap_adjusts_once() {
    let mut rig = Rig::new();
    rig.idle(2);
    rig.tick(InputFrame::touching(HOURS_UP));
    rig.tick(InputFrame::released(HOURS_UP));

    assert_eq!(rig.state(), ClockState::WaitingForTouch);
    assert_eq!(rig.time(), "02:00:00");
    assert_eq!(rig.canvas.last_text(), Some("02:00:00"));
    assert_eq!(rig.canvas.texts(Color::Red), vec!["02:00:00"]);
}

#[test]
fn test_decrement_cascades_through_minutes_and_hours() {
    let mut rig = Rig::new();
    rig.idle(2);
    rig.tick(InputFrame::touching(MINUTES_DOWN));
    rig.tick(InputFrame::released(MINUTES_DOWN));
    assert_eq!(rig.time(), "12:59:00");
}

#[test]
fn test_auto_repeat_delay_fires_on_tenth_tick() {
    let mut rig = rig_in_auto_repeat_delay(HOURS_UP);

    rig.hold(HOURS_UP, 9);
    assert_eq!(rig.state(), ClockState::AutoRepeatDelay);
    assert_eq!(rig.time(), "01:00:00");

    rig.hold(HOURS_UP, 1);
    assert_eq!(rig.state(), ClockState::FastRepeatTiming);
    assert_eq!(rig.time(), "02:00:00");
}

#[test]
fn test_release_beats_expiry_on_same_tick() {
    let mut rig = rig_in_auto_repeat_delay(HOURS_UP);
    rig.hold(HOURS_UP, 9);

    rig.tick(InputFrame::released(HOURS_UP));
    assert_eq!(rig.state(), ClockState::WaitingForTouch);
    assert_eq!(rig.time(), "02:00:00");
}

#[test]
fn test_fast_repeat_adjusts_every_three_ticks() {
    let mut rig = rig_in_auto_repeat_delay(HOURS_UP);
    rig.hold(HOURS_UP, 10);
    assert_eq!(rig.time(), "02:00:00");

    rig.hold(HOURS_UP, 2);
    assert_eq!(rig.state(), ClockState::FastRepeatFire);
    rig.hold(HOURS_UP, 1);
    assert_eq!(rig.state(), ClockState::FastRepeatTiming);
    assert_eq!(rig.time(), "03:00:00");

    rig.hold(HOURS_UP, 3);
    assert_eq!(rig.time(), "04:00:00");

    rig.tick(InputFrame::released(HOURS_UP));
    assert_eq!(rig.state(), ClockState::WaitingForTouch);
    assert_eq!(rig.time(), "04:00:00");
}

#[test]
fn test_second_advances_after_twenty_idle_ticks() {
    let mut rig = Rig::new();
    rig.idle(2);
    rig.tick(InputFrame::touching(HOURS_UP));
    rig.tick(InputFrame::released(HOURS_UP));
    assert_eq!(rig.state(), ClockState::WaitingForTouch);

    rig.idle(19);
    assert_eq!(rig.state(), ClockState::WaitingForTouch);
    rig.idle(1);
    assert_eq!(rig.state(), ClockState::AdvanceSecond);
    assert_eq!(rig.time(), "02:00:00");

    rig.idle(1);
    assert_eq!(rig.state(), ClockState::WaitingForTouch);
    assert_eq!(rig.time(), "02:00:01");
}

#[test]
fn test_wide_panel_renders_without_overflow() {
    let control = ClockControl::new(
        &ClockConfig::default(),
        TickPeriod::default(),
        Panel::new(16000, 240),
    );
    let mut canvas = RecordingCanvas::new();
    control.draw_initial(&mut canvas);
    assert_eq!(canvas.rects(Color::Black), 1);
    assert_eq!(canvas.last_text(), Some("01:00:00"));
}
