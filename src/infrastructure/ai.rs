pub mod minimax;

pub use minimax::Minimax;
