use super::flash_sequence::FlashSequence;
use super::sequence::SimonSequence;
use super::verify_sequence::VerifySequence;
use super::view;
use crate::config::SimonConfig;
use crate::domain::fsm::{StateCell, StateLabel, Threshold, TickCounter, TickMachine, TickPeriod};
use crate::domain::geometry::Panel;
use crate::domain::input::InputFrame;
use crate::domain::services::Canvas;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

const STARTING_ITERATION_LENGTH: usize = 1;
const WIN_MESSAGE: &str = "Yay! you win";
const NEW_LEVEL_MESSAGE: &str = "Touch to start new level";
const LOSE_MESSAGE: &str = "Sorry, you lose";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimonState {
    Init,
    SplashScreen,
    FlashingSequence,
    VerifyingSequence,
    YayWin,
    NewLevelFeedback,
    Lose,
    ShowLongestSequence,
}

impl StateLabel for SimonState {
    fn label(self) -> &'static str {
        match self {
            SimonState::Init => "init_st",
            SimonState::SplashScreen => "splash_screen_st",
            SimonState::FlashingSequence => "flashing_sequence_st",
            SimonState::VerifyingSequence => "verifying_sequence_st",
            SimonState::YayWin => "yay_win_st",
            SimonState::NewLevelFeedback => "new_level_feedback_st",
            SimonState::Lose => "lose_st",
            SimonState::ShowLongestSequence => "show_longest_sequence_st",
        }
    }
}

pub struct ControlIo<'a> {
    pub input: &'a InputFrame,
    pub canvas: &'a mut dyn Canvas,
    pub flash: &'a mut FlashSequence,
    pub verify: &'a mut VerifySequence,
    pub sequence: &'a mut SimonSequence,
}

/// Top-level Simon game: owns the screen cycle and the flash/verify
/// interlocks.
pub struct SimonControl {
    cell: StateCell<SimonState>,
    panel: Panel,
    rng: StdRng,
    splash: TickCounter,
    win: TickCounter,
    new_level: TickCounter,
    lose: TickCounter,
    longest_message: TickCounter,
    win_message_limit: Threshold,
    new_level_limit: Threshold,
    lose_message_limit: Threshold,
    longest_message_limit: Threshold,
    starting_session_length: usize,
    iteration_length: usize,
    session_length: usize,
    longest_sequence: usize,
    shown_longest: usize,
}

impl SimonControl {
    pub fn new(config: &SimonConfig, period: TickPeriod, panel: Panel) -> Self {
        Self {
            cell: StateCell::new("simon_control", SimonState::Init),
            panel,
            rng: StdRng::seed_from_u64(0),
            splash: TickCounter::default(),
            win: TickCounter::default(),
            new_level: TickCounter::default(),
            lose: TickCounter::default(),
            longest_message: TickCounter::default(),
            win_message_limit: period.beyond(config.win_message_ms),
            new_level_limit: period.beyond(config.new_level_ms),
            lose_message_limit: period.beyond(config.lose_message_ms),
            longest_message_limit: period.beyond(config.longest_sequence_ms),
            starting_session_length: config.starting_session_length,
            iteration_length: STARTING_ITERATION_LENGTH,
            session_length: config.starting_session_length,
            longest_sequence: 0,
            shown_longest: 0,
        }
    }

    pub fn iteration_length(&self) -> usize {
        self.iteration_length
    }

    pub fn session_length(&self) -> usize {
        self.session_length
    }

    /// Longest sequence completed since the summary screen was last shown.
    pub fn longest_sequence(&self) -> usize {
        self.longest_sequence
    }

    fn record_completed(&mut self, length: usize) {
        self.longest_sequence = self.longest_sequence.max(length);
    }

    fn start_session(&mut self, io: &mut ControlIo<'_>) {
        io.sequence.regenerate(&mut self.rng);
        self.iteration_length = STARTING_ITERATION_LENGTH;
        io.sequence.set_iteration_length(self.iteration_length);
        io.flash.enable();
        info!(
            session_length = self.session_length,
            "simon session started"
        );
    }

    fn draw_longest(&mut self, canvas: &mut dyn Canvas, erase: bool) {
        if !erase {
            self.shown_longest = self.longest_sequence;
        }
        let text = format!("Longest Sequence: {}", self.shown_longest);
        view::draw_message(canvas, &self.panel, &text, erase);
    }
}

impl TickMachine for SimonControl {
    type State = SimonState;
    type Io<'a> = ControlIo<'a>;

    fn cell(&self) -> &StateCell<SimonState> {
        &self.cell
    }

    fn cell_mut(&mut self) -> &mut StateCell<SimonState> {
        &mut self.cell
    }

    fn act(&mut self, _io: &mut ControlIo<'_>) {
        match self.state() {
            SimonState::Init | SimonState::FlashingSequence | SimonState::VerifyingSequence => {}
            SimonState::SplashScreen => self.splash.advance(),
            SimonState::YayWin => self.win.advance(),
            SimonState::NewLevelFeedback => self.new_level.advance(),
            SimonState::Lose => self.lose.advance(),
            SimonState::ShowLongestSequence => self.longest_message.advance(),
        }
    }

    fn advance(&mut self, io: &mut ControlIo<'_>) -> SimonState {
        match self.state() {
            SimonState::Init => {
                view::draw_splash(io.canvas, &self.panel, false);
                SimonState::SplashScreen
            }
            SimonState::SplashScreen if io.input.is_touched() => {
                self.rng = StdRng::seed_from_u64(u64::from(self.splash.value()));
                self.splash.reset();
                view::draw_splash(io.canvas, &self.panel, true);
                self.session_length = self.starting_session_length;
                self.start_session(io);
                SimonState::FlashingSequence
            }
            SimonState::SplashScreen => SimonState::SplashScreen,
            SimonState::FlashingSequence if io.flash.is_complete() => {
                io.flash.disable();
                io.verify.enable();
                view::draw_all_buttons(io.canvas, &self.panel);
                SimonState::VerifyingSequence
            }
            SimonState::FlashingSequence => SimonState::FlashingSequence,
            SimonState::VerifyingSequence if io.verify.is_complete() => {
                let failed = io.verify.is_timeout_error() || io.verify.is_input_error();
                io.verify.disable();
                view::erase_all_buttons(io.canvas, &self.panel);
                if failed {
                    view::draw_message(io.canvas, &self.panel, LOSE_MESSAGE, false);
                    SimonState::Lose
                } else if self.iteration_length >= self.session_length {
                    self.record_completed(self.iteration_length);
                    view::draw_message(io.canvas, &self.panel, WIN_MESSAGE, false);
                    SimonState::YayWin
                } else {
                    self.record_completed(self.iteration_length);
                    self.iteration_length += 1;
                    io.sequence.set_iteration_length(self.iteration_length);
                    io.flash.enable();
                    SimonState::FlashingSequence
                }
            }
            SimonState::VerifyingSequence => SimonState::VerifyingSequence,
            SimonState::YayWin if self.win.expired(self.win_message_limit) => {
                self.win.reset();
                view::draw_message(io.canvas, &self.panel, WIN_MESSAGE, true);
                view::draw_message(io.canvas, &self.panel, NEW_LEVEL_MESSAGE, false);
                SimonState::NewLevelFeedback
            }
            SimonState::YayWin => SimonState::YayWin,
            SimonState::NewLevelFeedback if self.new_level.expired(self.new_level_limit) => {
                self.new_level.reset();
                view::draw_message(io.canvas, &self.panel, NEW_LEVEL_MESSAGE, true);
                self.draw_longest(io.canvas, false);
                SimonState::ShowLongestSequence
            }
            SimonState::NewLevelFeedback if io.input.is_touched() => {
                self.new_level.reset();
                view::draw_message(io.canvas, &self.panel, NEW_LEVEL_MESSAGE, true);
                self.session_length = (self.session_length + 1).min(io.sequence.capacity());
                self.start_session(io);
                SimonState::FlashingSequence
            }
            SimonState::NewLevelFeedback => SimonState::NewLevelFeedback,
            SimonState::Lose if self.lose.expired(self.lose_message_limit) => {
                self.lose.reset();
                view::draw_message(io.canvas, &self.panel, LOSE_MESSAGE, true);
                self.draw_longest(io.canvas, false);
                SimonState::ShowLongestSequence
            }
            SimonState::Lose => SimonState::Lose,
            SimonState::ShowLongestSequence
                if self.longest_message.expired(self.longest_message_limit) =>
            {
                self.longest_message.reset();
                self.longest_sequence = 0;
                self.draw_longest(io.canvas, true);
                view::draw_splash(io.canvas, &self.panel, false);
                SimonState::SplashScreen
            }
            SimonState::ShowLongestSequence => SimonState::ShowLongestSequence,
        }
    }
}
