use super::button_handler::ButtonHandler;
use super::sequence::SimonSequence;
use crate::domain::fsm::{
    Interlock, StateCell, StateLabel, Threshold, TickCounter, TickMachine, TickPeriod,
};
use crate::domain::geometry::Region;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyState {
    Init,
    WaitingUserInput,
    VerifyUserInput,
    End,
}

impl StateLabel for VerifyState {
    fn label(self) -> &'static str {
        match self {
            VerifyState::Init => "init_st",
            VerifyState::WaitingUserInput => "waiting_user_input_st",
            VerifyState::VerifyUserInput => "verify_user_input_st",
            VerifyState::End => "end_st",
        }
    }
}

pub struct VerifyIo<'a> {
    pub buttons: &'a mut ButtonHandler,
    pub sequence: &'a SimonSequence,
}

/// Collects the user's presses through the button handler and checks them
/// against the sequence.
///
/// Errors are sticky flags, readable until the next disable/enable cycle.
pub struct VerifySequence {
    cell: StateCell<VerifyState>,
    interlock: Interlock,
    index: usize,
    iteration_length: usize,
    touched_region: Option<Region>,
    timeout: TickCounter,
    input_timeout: Threshold,
    timeout_error: bool,
    input_error: bool,
}

impl VerifySequence {
    pub fn new(input_timeout_ms: u32, period: TickPeriod) -> Self {
        Self {
            cell: StateCell::new("verify_sequence", VerifyState::Init),
            interlock: Interlock::default(),
            index: 0,
            iteration_length: 0,
            touched_region: None,
            timeout: TickCounter::default(),
            input_timeout: period.beyond(input_timeout_ms),
            timeout_error: false,
            input_error: false,
        }
    }

    pub fn enable(&mut self) {
        self.interlock.enable();
    }

    pub fn disable(&mut self) {
        self.interlock.disable();
    }

    pub fn is_complete(&self) -> bool {
        self.state() == VerifyState::End
    }

    pub fn is_timeout_error(&self) -> bool {
        self.timeout_error
    }

    pub fn is_input_error(&self) -> bool {
        self.input_error
    }

    fn reset(&mut self) {
        self.index = 0;
        self.iteration_length = 0;
        self.touched_region = None;
        self.timeout.reset();
        self.timeout_error = false;
        self.input_error = false;
    }
}

impl TickMachine for VerifySequence {
    type State = VerifyState;
    type Io<'a> = VerifyIo<'a>;

    fn cell(&self) -> &StateCell<VerifyState> {
        &self.cell
    }

    fn cell_mut(&mut self) -> &mut StateCell<VerifyState> {
        &mut self.cell
    }

    fn act(&mut self, _io: &mut VerifyIo<'_>) {
        match self.state() {
            VerifyState::Init | VerifyState::End => {}
            VerifyState::WaitingUserInput => self.timeout.advance(),
            VerifyState::VerifyUserInput => self.timeout.reset(),
        }
    }

    fn advance(&mut self, io: &mut VerifyIo<'_>) -> VerifyState {
        let state = self.state();
        if !self.interlock.is_enabled() {
            if state != VerifyState::Init {
                io.buttons.disable();
            }
            self.reset();
            return VerifyState::Init;
        }

        match state {
            VerifyState::Init => {
                io.buttons.enable();
                self.iteration_length = io.sequence.iteration_length();
                VerifyState::WaitingUserInput
            }
            // A release on the expiry tick still counts as an answer.
            VerifyState::WaitingUserInput if io.buttons.release_detected() => {
                self.touched_region = io.buttons.region();
                io.buttons.disable();
                VerifyState::VerifyUserInput
            }
            VerifyState::WaitingUserInput if self.timeout.expired(self.input_timeout) => {
                self.timeout_error = true;
                io.buttons.disable();
                VerifyState::End
            }
            VerifyState::WaitingUserInput => VerifyState::WaitingUserInput,
            VerifyState::VerifyUserInput => {
                let expected = io.sequence.value(self.index);
                self.index += 1;
                if expected.is_some() && self.touched_region == expected {
                    if self.index < self.iteration_length {
                        io.buttons.enable();
                        VerifyState::WaitingUserInput
                    } else {
                        io.buttons.disable();
                        VerifyState::End
                    }
                } else {
                    io.buttons.disable();
                    self.input_error = true;
                    VerifyState::End
                }
            }
            VerifyState::End => VerifyState::End,
        }
    }
}
