use crate::domain::geometry::{Color, Point};
use crate::domain::services::Canvas;
use tracing::trace;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOp {
    Line {
        from: Point,
        to: Point,
        color: Color,
    },
    Rect {
        origin: Point,
        width: i16,
        height: i16,
        color: Color,
    },
    Circle {
        center: Point,
        radius: i16,
        color: Color,
    },
    Cursor(Point),
    Text {
        text: String,
        size: u8,
        color: Color,
    },
}

/// Headless canvas that keeps every primitive it is asked to draw.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Text printed in `color`, in drawing order.
    pub fn texts(&self, color: Color) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, color: c, .. } if *c == color => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_text(&self) -> Option<&str> {
        self.ops.iter().rev().find_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn rects(&self, color: Color) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rect { color: c, .. } if *c == color))
            .count()
    }

    pub fn circles(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count()
    }

    pub fn lines(&self, color: Color) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { color: c, .. } if *c == color))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        trace!(?from, ?to, ?color, "draw_line");
        self.ops.push(DrawOp::Line { from, to, color });
    }

    fn fill_rect(&mut self, origin: Point, width: i16, height: i16, color: Color) {
        trace!(?origin, width, height, ?color, "fill_rect");
        self.ops.push(DrawOp::Rect {
            origin,
            width,
            height,
            color,
        });
    }

    fn draw_circle(&mut self, center: Point, radius: i16, color: Color) {
        trace!(?center, radius, ?color, "draw_circle");
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn set_cursor(&mut self, at: Point) {
        self.ops.push(DrawOp::Cursor(at));
    }

    fn print_text(&mut self, text: &str, size: u8, color: Color) {
        trace!(text, size, ?color, "print_text");
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            size,
            color,
        });
    }
}
