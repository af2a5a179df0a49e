pub mod ai;
pub mod canvas;
pub mod clock;
pub mod display;
pub mod input;
