use ticklabs::application::Surface;
use ticklabs::application::simon::{ButtonHandler, ButtonState};
use ticklabs::domain::fsm::{TickMachine, TickPeriod};
use ticklabs::domain::geometry::{Color, Panel, Region, TouchPoint};
use ticklabs::domain::input::InputFrame;
use ticklabs::infrastructure::canvas::RecordingCanvas;

const TOP_RIGHT: TouchPoint = TouchPoint::new(240, 60, 1);

struct Rig {
    handler: ButtonHandler,
    canvas: RecordingCanvas,
}

impl Rig {
    fn new(adc_settle_ms: u32) -> Self {
        Self {
            handler: ButtonHandler::new(adc_settle_ms, TickPeriod::default(), Panel::default()),
            canvas: RecordingCanvas::new(),
        }
    }

    fn tick(&mut self, mut frame: InputFrame) -> InputFrame {
        self.handler.tick(&mut Surface {
            input: &mut frame,
            canvas: &mut self.canvas,
        });
        frame
    }

    /// Enabled and ticked into `WaitingForTouch`.
    fn waiting(adc_settle_ms: u32) -> Self {
        let mut rig = Self::new(adc_settle_ms);
        rig.handler.enable();
        rig.tick(InputFrame::idle());
        assert_eq!(rig.handler.state(), ButtonState::WaitingForTouch);
        rig
    }
}

#[test]
fn test_does_nothing_until_enabled() {
    let mut rig = Rig::new(50);
    for _ in 0..5 {
        rig.tick(InputFrame::touching(TOP_RIGHT));
    }
    assert_eq!(rig.handler.state(), ButtonState::Init);
    assert!(rig.canvas.ops().is_empty());
}

#[test]
fn test_touch_resolves_region_and_pulses_release() {
    let mut rig = Rig::waiting(50);

    let frame = rig.tick(InputFrame::touching(TOP_RIGHT));
    assert!(frame.stale_touch_cleared());
    assert_eq!(rig.handler.state(), ButtonState::AdcSettling);

    rig.tick(InputFrame::touching(TOP_RIGHT));
    assert_eq!(rig.handler.state(), ButtonState::Touching);
    assert_eq!(rig.handler.region(), Some(Region::TopRight));
    assert_eq!(rig.canvas.rects(Color::Yellow), 1);

    rig.tick(InputFrame::touching(TOP_RIGHT));
    assert!(!rig.handler.release_detected());

    rig.tick(InputFrame::released(TOP_RIGHT));
    assert_eq!(rig.handler.state(), ButtonState::WaitingForTouch);
    assert!(rig.handler.release_detected());
    assert_eq!(rig.canvas.rects(Color::Black), 1);
    assert_eq!(rig.canvas.rects(Color::Yellow), 2);

    rig.tick(InputFrame::released(TOP_RIGHT));
    assert!(!rig.handler.release_detected());
}

#[test]
fn test_release_before_settle_is_ignored() {
    let mut rig = Rig::waiting(150);
    rig.tick(InputFrame::touching(TOP_RIGHT));
    rig.tick(InputFrame::touching(TOP_RIGHT));
    assert_eq!(rig.handler.state(), ButtonState::AdcSettling);

    rig.tick(InputFrame::released(TOP_RIGHT));
    assert_eq!(rig.handler.state(), ButtonState::WaitingForTouch);
    assert_eq!(rig.handler.region(), None);
    assert!(!rig.handler.release_detected());
    assert!(rig.canvas.ops().is_empty());
}

#[test]
fn test_settle_expiry_uses_at_least() {
    let mut rig = Rig::waiting(150);
    rig.tick(InputFrame::touching(TOP_RIGHT));
    rig.tick(InputFrame::touching(TOP_RIGHT));
    rig.tick(InputFrame::touching(TOP_RIGHT));
    assert_eq!(rig.handler.state(), ButtonState::AdcSettling);
    rig.tick(InputFrame::touching(TOP_RIGHT));
    assert_eq!(rig.handler.state(), ButtonState::Touching);
}

#[test]
fn test_disable_mid_touch_cleans_up() {
    let mut rig = Rig::waiting(50);
    rig.tick(InputFrame::touching(TOP_RIGHT));
    rig.tick(InputFrame::touching(TOP_RIGHT));
    assert_eq!(rig.handler.state(), ButtonState::Touching);

    rig.handler.disable();
    rig.tick(InputFrame::touching(TOP_RIGHT));

    assert_eq!(rig.handler.state(), ButtonState::Init);
    assert_eq!(rig.handler.region(), None);
    assert!(!rig.handler.release_detected());
    assert_eq!(rig.canvas.rects(Color::Black), 1);
}

#[test]
fn test_disable_clears_pending_release() {
    let mut rig = Rig::waiting(50);
    rig.tick(InputFrame::touching(TOP_RIGHT));
    rig.tick(InputFrame::touching(TOP_RIGHT));
    rig.tick(InputFrame::released(TOP_RIGHT));
    assert!(rig.handler.release_detected());

    rig.handler.disable();
    rig.tick(InputFrame::idle());
    assert_eq!(rig.handler.state(), ButtonState::Init);
    assert!(!rig.handler.release_detected());

    rig.handler.enable();
    rig.tick(InputFrame::idle());
    assert_eq!(rig.handler.state(), ButtonState::WaitingForTouch);
}
