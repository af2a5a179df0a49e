//! Tick-scheduled state machines.
//!
//! A machine advances exactly one step per [`TickMachine::tick`] and never
//! blocks. Waiting is expressed as state residency counted in ticks.
//!
//! Each tick runs in two phases: the action for the current state, then the
//! transition guards for that same state. A state entered on this tick does
//! not run its action until the next tick.

mod cell;
mod counter;
mod interlock;

pub use cell::StateCell;
pub use counter::{Expiry, Threshold, TickCounter, TickPeriod};
pub use interlock::Interlock;

use std::fmt::Debug;

pub trait StateLabel: Copy + Eq + Debug {
    fn label(self) -> &'static str;
}

pub trait TickMachine {
    type State: StateLabel;

    /// Everything the machine reads or drives during one tick besides its
    /// own fields: the input frame, collaborators, peer machines.
    type Io<'a>;

    fn cell(&self) -> &StateCell<Self::State>;

    fn cell_mut(&mut self) -> &mut StateCell<Self::State>;

    /// Phase one: the continuous effect of the current state.
    fn act(&mut self, io: &mut Self::Io<'_>);

    /// Phase two: evaluate guards in priority order and pick the next state.
    fn advance(&mut self, io: &mut Self::Io<'_>) -> Self::State;

    fn state(&self) -> Self::State {
        self.cell().current()
    }

    fn tick(&mut self, io: &mut Self::Io<'_>) {
        self.act(io);
        let next = self.advance(io);
        self.cell_mut().enter(next);
    }
}
