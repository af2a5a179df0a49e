use crate::domain::geometry::TouchPoint;
use crate::domain::services::InputSurface;

/// Bitmask of the push buttons, bit 0 = BTN0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonMask(pub u8);

impl ButtonMask {
    pub const NONE: ButtonMask = ButtonMask(0);
    pub const BTN0: ButtonMask = ButtonMask(0x1);
    pub const BTN1: ButtonMask = ButtonMask(0x2);

    pub fn contains(&self, other: ButtonMask) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }
}

/// Read-only snapshot of the input surface, taken once per period and shared
/// by every machine ticked in that period.
///
/// The touch point is whatever the controller last latched, so it stays
/// readable after the finger lifts. The only thing a machine may write is a
/// request to discard stale touch data; the driver forwards it to the surface
/// after the period.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputFrame {
    touched: bool,
    point: TouchPoint,
    buttons: ButtonMask,
    clear_requested: bool,
}

impl InputFrame {
    pub fn capture(surface: &dyn InputSurface) -> Self {
        Self {
            touched: surface.is_touched(),
            point: surface.touch_point(),
            buttons: surface.read_buttons(),
            clear_requested: false,
        }
    }

    pub fn idle() -> Self {
        Self::default()
    }

    pub fn touching(at: TouchPoint) -> Self {
        Self {
            touched: true,
            point: at,
            ..Self::default()
        }
    }

    /// Not touched, with `at` still latched from the last contact.
    pub fn released(at: TouchPoint) -> Self {
        Self {
            touched: false,
            point: at,
            ..Self::default()
        }
    }

    pub fn pressing(buttons: ButtonMask) -> Self {
        Self {
            buttons,
            ..Self::default()
        }
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn touch_point(&self) -> TouchPoint {
        self.point
    }

    pub fn buttons(&self) -> ButtonMask {
        self.buttons
    }

    pub fn clear_stale_touch(&mut self) {
        self.clear_requested = true;
    }

    pub fn stale_touch_cleared(&self) -> bool {
        self.clear_requested
    }
}
