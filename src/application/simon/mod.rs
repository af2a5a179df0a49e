//! Simon: four interlocked machines sharing one sequence buffer.
//!
//! Per period the button handler ticks first, then flash, then verify, then
//! the controller, so a release raised by the handler is seen by verify in
//! the same period.

pub mod button_handler;
pub mod control;
pub mod flash_sequence;
pub mod sequence;
pub mod verify_sequence;
mod view;

pub use button_handler::{ButtonHandler, ButtonState};
pub use control::{ControlIo, SimonControl, SimonState};
pub use flash_sequence::{FlashIo, FlashSequence, FlashState};
pub use sequence::SimonSequence;
pub use verify_sequence::{VerifyIo, VerifySequence, VerifyState};
