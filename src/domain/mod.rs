pub mod board;
pub mod clock_time;
pub mod fsm;
pub mod geometry;
pub mod input;
pub mod models;
pub mod rules;
pub mod services;
