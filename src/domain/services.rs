use crate::domain::board::Board;
use crate::domain::geometry::{Color, Point, TouchPoint};
use crate::domain::input::ButtonMask;
use crate::domain::models::{Move, Side};
use std::time::Duration;

/// Free-running elapsed-time source. Only used to profile tick durations.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Polled touch panel and push buttons.
pub trait InputSurface {
    /// Latch the hardware state for the coming period.
    fn refresh(&mut self) {}

    fn is_touched(&self) -> bool;

    fn touch_point(&self) -> TouchPoint;

    fn clear_stale_touch(&mut self);

    fn read_buttons(&self) -> ButtonMask;
}

/// Fire-and-forget drawing primitives.
pub trait Canvas {
    fn draw_line(&mut self, from: Point, to: Point, color: Color);

    fn fill_rect(&mut self, origin: Point, width: i16, height: i16, color: Color);

    fn draw_circle(&mut self, center: Point, radius: i16, color: Color);

    fn set_cursor(&mut self, at: Point);

    fn print_text(&mut self, text: &str, size: u8, color: Color);
}

pub trait MoveStrategy {
    fn next_move(&mut self, board: &Board, side: Side) -> Option<Move>;
}
