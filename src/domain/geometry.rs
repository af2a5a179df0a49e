use crate::domain::clock_time::{Adjustment, TimeField};
use crate::domain::models::Move;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

/// Raw touch-controller reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchPoint {
    pub x: i16,
    pub y: i16,
    pub pressure: u8,
}

impl TouchPoint {
    pub const fn new(x: i16, y: i16, pressure: u8) -> Self {
        Self { x, y, pressure }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
    Red,
    Green,
    Blue,
    Yellow,
}

/// One of the four Simon buttons, numbered row-major across quadrants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::TopLeft,
        Region::TopRight,
        Region::BottomLeft,
        Region::BottomRight,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn color(&self) -> Color {
        match self {
            Region::TopLeft => Color::Red,
            Region::TopRight => Color::Yellow,
            Region::BottomLeft => Color::Blue,
            Region::BottomRight => Color::Green,
        }
    }
}

/// Touch-panel dimensions and the region maps each lab lays over them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Panel {
    pub width: i16,
    pub height: i16,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
        }
    }
}

impl Panel {
    pub fn new(width: i16, height: i16) -> Self {
        Self { width, height }
    }

    /// Top half increments, bottom half decrements; thirds left to right
    /// select hours, minutes, seconds.
    pub fn clock_adjustment(&self, at: Point) -> Adjustment {
        let field = if at.x < self.width / 3 {
            TimeField::Hours
        } else if i32::from(at.x) < i32::from(self.width) * 2 / 3 {
            TimeField::Minutes
        } else {
            TimeField::Seconds
        };
        if at.y < self.height / 2 {
            Adjustment::Increment(field)
        } else {
            Adjustment::Decrement(field)
        }
    }

    pub fn quadrant(&self, at: Point) -> Region {
        let left = at.x < self.width / 2;
        let top = at.y < self.height / 2;
        match (top, left) {
            (true, true) => Region::TopLeft,
            (true, false) => Region::TopRight,
            (false, true) => Region::BottomLeft,
            (false, false) => Region::BottomRight,
        }
    }

    /// Top-left corner of a quadrant.
    pub fn quadrant_origin(&self, region: Region) -> Point {
        let (w, h) = (self.width / 2, self.height / 2);
        match region {
            Region::TopLeft => Point::new(0, 0),
            Region::TopRight => Point::new(w, 0),
            Region::BottomLeft => Point::new(0, h),
            Region::BottomRight => Point::new(w, h),
        }
    }

    pub fn grid_cell(&self, at: Point) -> Move {
        let third = |v: i16, span: i16| -> usize {
            let cell = v.clamp(0, span - 1) as i32 * 3 / span as i32;
            cell.clamp(0, 2) as usize
        };
        let row = third(at.y, self.height);
        let column = third(at.x, self.width);
        Move::new(row, column).unwrap_or(Move::CENTER)
    }

    /// Top-left corner of a grid cell.
    pub fn cell_origin(&self, cell: Move) -> Point {
        Point::new(
            cell.column() as i16 * self.cell_width(),
            cell.row() as i16 * self.cell_height(),
        )
    }

    pub fn cell_width(&self) -> i16 {
        self.width / 3
    }

    pub fn cell_height(&self) -> i16 {
        self.height / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_zones() {
        let panel = Panel::default();
        assert_eq!(
            panel.clock_adjustment(Point::new(10, 10)),
            Adjustment::Increment(TimeField::Hours)
        );
        assert_eq!(
            panel.clock_adjustment(Point::new(160, 200)),
            Adjustment::Decrement(TimeField::Minutes)
        );
        assert_eq!(
            panel.clock_adjustment(Point::new(300, 119)),
            Adjustment::Increment(TimeField::Seconds)
        );
    }

    #[test]
    fn test_clock_zones_on_wide_panel() {
        let panel = Panel::new(30000, 240);
        assert_eq!(
            panel.clock_adjustment(Point::new(19999, 0)),
            Adjustment::Increment(TimeField::Minutes)
        );
        assert_eq!(
            panel.clock_adjustment(Point::new(20000, 239)),
            Adjustment::Decrement(TimeField::Seconds)
        );
    }

    #[test]
    fn test_quadrants_split_at_midlines() {
        let panel = Panel::default();
        assert_eq!(panel.quadrant(Point::new(159, 119)), Region::TopLeft);
        assert_eq!(panel.quadrant(Point::new(160, 0)), Region::TopRight);
        assert_eq!(panel.quadrant(Point::new(0, 120)), Region::BottomLeft);
        assert_eq!(panel.quadrant(Point::new(319, 239)), Region::BottomRight);
    }

    #[test]
    fn test_grid_cells() {
        let panel = Panel::default();
        assert_eq!(panel.grid_cell(Point::new(0, 0)), Move::new(0, 0).unwrap());
        assert_eq!(panel.grid_cell(Point::new(160, 120)), Move::CENTER);
        assert_eq!(
            panel.grid_cell(Point::new(319, 239)),
            Move::new(2, 2).unwrap()
        );
        assert_eq!(
            panel.grid_cell(Point::new(500, -4)),
            Move::new(0, 2).unwrap()
        );
    }
}
