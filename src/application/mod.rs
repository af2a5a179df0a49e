pub mod clock_control;
pub mod driver;
pub mod labs;
pub mod simon;
pub mod tictactoe_control;

use crate::domain::input::InputFrame;
use crate::domain::services::Canvas;

pub use driver::{Driver, Lab, RunSummary, TickProfiler, TickSample};
pub use labs::{ClockLab, SimonLab, TicTacToeLab};

/// The input frame and canvas, lent to a machine for one tick.
pub struct Surface<'a> {
    pub input: &'a mut InputFrame,
    pub canvas: &'a mut dyn Canvas,
}
