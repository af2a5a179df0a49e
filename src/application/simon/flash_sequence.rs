use super::sequence::SimonSequence;
use super::view;
use crate::domain::fsm::{
    Interlock, StateCell, StateLabel, Threshold, TickCounter, TickMachine, TickPeriod,
};
use crate::domain::geometry::Panel;
use crate::domain::services::Canvas;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashState {
    Init,
    DisplayNewSquare,
    DisplayCounterRunning,
    End,
}

impl StateLabel for FlashState {
    fn label(self) -> &'static str {
        match self {
            FlashState::Init => "init_st",
            FlashState::DisplayNewSquare => "display_new_square_st",
            FlashState::DisplayCounterRunning => "display_counter_running_st",
            FlashState::End => "end_st",
        }
    }
}

pub struct FlashIo<'a> {
    pub canvas: &'a mut dyn Canvas,
    pub sequence: &'a SimonSequence,
}

/// Replays the first `iteration_length` squares of the sequence.
pub struct FlashSequence {
    cell: StateCell<FlashState>,
    interlock: Interlock,
    panel: Panel,
    index: usize,
    iteration_length: usize,
    display: TickCounter,
    flash: Threshold,
}

impl FlashSequence {
    pub fn new(flash_ms: u32, period: TickPeriod, panel: Panel) -> Self {
        Self {
            cell: StateCell::new("flash_sequence", FlashState::Init),
            interlock: Interlock::default(),
            panel,
            index: 0,
            iteration_length: 0,
            display: TickCounter::default(),
            flash: period.beyond(flash_ms),
        }
    }

    pub fn enable(&mut self) {
        self.interlock.enable();
    }

    pub fn disable(&mut self) {
        self.interlock.disable();
    }

    pub fn is_complete(&self) -> bool {
        self.state() == FlashState::End
    }

    /// Index of the square currently on screen, or the next one to show.
    pub fn index(&self) -> usize {
        self.index
    }

    fn erase_current(&self, io: &mut FlashIo<'_>) {
        if let Some(region) = io.sequence.value(self.index) {
            view::draw_square(io.canvas, &self.panel, region, true);
        }
    }
}

impl TickMachine for FlashSequence {
    type State = FlashState;
    type Io<'a> = FlashIo<'a>;

    fn cell(&self) -> &StateCell<FlashState> {
        &self.cell
    }

    fn cell_mut(&mut self) -> &mut StateCell<FlashState> {
        &mut self.cell
    }

    fn act(&mut self, io: &mut FlashIo<'_>) {
        match self.state() {
            FlashState::Init | FlashState::End => {}
            FlashState::DisplayNewSquare => {
                if let Some(region) = io.sequence.value(self.index) {
                    view::draw_square(io.canvas, &self.panel, region, false);
                }
            }
            FlashState::DisplayCounterRunning => self.display.advance(),
        }
    }

    fn advance(&mut self, io: &mut FlashIo<'_>) -> FlashState {
        let state = self.state();
        if !self.interlock.is_enabled() {
            if matches!(
                state,
                FlashState::DisplayNewSquare | FlashState::DisplayCounterRunning
            ) {
                self.erase_current(io);
            }
            self.index = 0;
            self.iteration_length = 0;
            self.display.reset();
            return FlashState::Init;
        }

        match state {
            FlashState::Init => {
                self.iteration_length = io.sequence.iteration_length();
                if self.iteration_length == 0 {
                    FlashState::End
                } else {
                    FlashState::DisplayNewSquare
                }
            }
            FlashState::DisplayNewSquare => FlashState::DisplayCounterRunning,
            FlashState::DisplayCounterRunning if self.display.expired(self.flash) => {
                self.display.reset();
                self.erase_current(io);
                self.index += 1;
                if self.index >= self.iteration_length {
                    FlashState::End
                } else {
                    FlashState::DisplayNewSquare
                }
            }
            FlashState::DisplayCounterRunning => FlashState::DisplayCounterRunning,
            FlashState::End => FlashState::End,
        }
    }
}
