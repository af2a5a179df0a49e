use crate::application::Surface;
use crate::config::TicTacToeConfig;
use crate::domain::board::Board;
use crate::domain::fsm::{StateCell, StateLabel, Threshold, TickCounter, TickMachine, TickPeriod};
use crate::domain::geometry::{Color, Panel, Point};
use crate::domain::input::ButtonMask;
use crate::domain::models::{Move, Score, Side};
use crate::domain::rules::Rules;
use crate::domain::services::{Canvas, MoveStrategy};
use tracing::{debug, info};

const RESET_BUTTON: ButtonMask = ButtonMask::BTN0;
const SPLASH_SIZE: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicTacToeState {
    Init,
    Splash,
    WaitingFirstMove,
    AdcSettling,
    PlayerTurnWaiting,
    EvaluatePlayerMove,
    ComputerTurn,
    EndGame,
}

impl StateLabel for TicTacToeState {
    fn label(self) -> &'static str {
        match self {
            TicTacToeState::Init => "init_st",
            TicTacToeState::Splash => "splash_screen_st",
            TicTacToeState::WaitingFirstMove => "waiting_first_move_st",
            TicTacToeState::AdcSettling => "adc_counter_running_st",
            TicTacToeState::PlayerTurnWaiting => "player_turn_waiting_st",
            TicTacToeState::EvaluatePlayerMove => "evaluate_player_move_st",
            TicTacToeState::ComputerTurn => "computer_turn_st",
            TicTacToeState::EndGame => "end_game_st",
        }
    }
}

/// Touch tic-tac-toe against a move strategy.
///
/// Whoever moves first plays X, the maximizing side. The board is owned here
/// and only ever lent to the strategy by shared reference.
pub struct TicTacToeControl {
    cell: StateCell<TicTacToeState>,
    panel: Panel,
    board: Board,
    strategy: Box<dyn MoveStrategy + Send>,
    user_side: Side,
    pending: Option<Move>,
    score: Score,
    splash: TickCounter,
    first_move: TickCounter,
    adc: TickCounter,
    splash_limit: Threshold,
    first_move_limit: Threshold,
    adc_settle: Threshold,
}

impl TicTacToeControl {
    pub fn new(
        config: &TicTacToeConfig,
        period: TickPeriod,
        panel: Panel,
        strategy: Box<dyn MoveStrategy + Send>,
    ) -> Self {
        Self {
            cell: StateCell::new("tictactoe_control", TicTacToeState::Init),
            panel,
            board: Board::new(),
            strategy,
            user_side: Side::Player,
            pending: None,
            score: Score::NotTerminal,
            splash: TickCounter::default(),
            first_move: TickCounter::default(),
            adc: TickCounter::default(),
            splash_limit: period.at_least(config.splash_ms),
            first_move_limit: period.at_least(config.first_move_ms),
            adc_settle: period.at_least(config.adc_settle_ms),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn user_side(&self) -> Side {
        self.user_side
    }

    pub fn computer_side(&self) -> Side {
        self.user_side.opponent()
    }

    /// Outcome after the most recent half-move.
    pub fn score(&self) -> Score {
        self.score
    }

    fn play(&mut self, canvas: &mut dyn Canvas, mv: Move, side: Side) -> bool {
        match self.board.place(mv, side) {
            Ok(()) => {
                self.draw_mark(canvas, mv, side, false);
                self.score = Rules::score_board(&self.board, side);
                debug!(?mv, ?side, score = ?self.score, "move played");
                true
            }
            Err(err) => {
                debug!(%err, "move rejected");
                false
            }
        }
    }

    fn computer_move(&mut self, canvas: &mut dyn Canvas) {
        let side = self.computer_side();
        match self.strategy.next_move(&self.board, side) {
            Some(mv) => {
                self.play(canvas, mv, side);
            }
            None => self.score = Rules::outcome(&self.board),
        }
    }

    fn reset(&mut self, canvas: &mut dyn Canvas) {
        for mv in self.board.occupied() {
            let side = if self.board.get(mv) == Side::Player.square() {
                Side::Player
            } else {
                Side::Opponent
            };
            self.draw_mark(canvas, mv, side, true);
        }
        self.board.clear();
        self.pending = None;
        self.score = Score::NotTerminal;
        self.user_side = Side::Player;
        self.splash.reset();
        self.first_move.reset();
        self.adc.reset();
        info!("tic-tac-toe reset");
    }

    fn draw_splash(&self, canvas: &mut dyn Canvas, erase: bool) {
        let color = if erase { Color::Black } else { Color::White };
        canvas.set_cursor(Point::new(self.panel.width / 6, self.panel.height / 3));
        canvas.print_text("Tic-Tac-Toe", SPLASH_SIZE, color);
    }

    fn draw_board_lines(&self, canvas: &mut dyn Canvas) {
        let (w, h) = (self.panel.cell_width(), self.panel.cell_height());
        for i in 1..3 {
            canvas.draw_line(
                Point::new(i * w, 0),
                Point::new(i * w, self.panel.height - 1),
                Color::Green,
            );
            canvas.draw_line(
                Point::new(0, i * h),
                Point::new(self.panel.width - 1, i * h),
                Color::Green,
            );
        }
    }

    fn draw_mark(&self, canvas: &mut dyn Canvas, mv: Move, side: Side, erase: bool) {
        let origin = self.panel.cell_origin(mv);
        let (w, h) = (self.panel.cell_width(), self.panel.cell_height());
        let inset = w.min(h) / 6;
        let color = if erase { Color::Black } else { Color::Green };
        match side {
            Side::Player => {
                canvas.draw_line(
                    Point::new(origin.x + inset, origin.y + inset),
                    Point::new(origin.x + w - inset, origin.y + h - inset),
                    color,
                );
                canvas.draw_line(
                    Point::new(origin.x + w - inset, origin.y + inset),
                    Point::new(origin.x + inset, origin.y + h - inset),
                    color,
                );
            }
            Side::Opponent => {
                let center = Point::new(origin.x + w / 2, origin.y + h / 2);
                canvas.draw_circle(center, w.min(h) / 2 - inset, color);
            }
        }
    }
}

impl TickMachine for TicTacToeControl {
    type State = TicTacToeState;
    type Io<'a> = Surface<'a>;

    fn cell(&self) -> &StateCell<TicTacToeState> {
        &self.cell
    }

    fn cell_mut(&mut self) -> &mut StateCell<TicTacToeState> {
        &mut self.cell
    }

    fn act(&mut self, io: &mut Surface<'_>) {
        match self.state() {
            TicTacToeState::Init
            | TicTacToeState::PlayerTurnWaiting
            | TicTacToeState::EndGame => {}
            TicTacToeState::Splash => self.splash.advance(),
            TicTacToeState::WaitingFirstMove => self.first_move.advance(),
            TicTacToeState::AdcSettling => self.adc.advance(),
            TicTacToeState::EvaluatePlayerMove => {
                self.pending = Some(self.panel.grid_cell(io.input.touch_point().position()));
            }
            TicTacToeState::ComputerTurn => self.computer_move(io.canvas),
        }
    }

    fn advance(&mut self, io: &mut Surface<'_>) -> TicTacToeState {
        let touched = io.input.is_touched();
        match self.state() {
            TicTacToeState::Init => {
                self.draw_splash(io.canvas, false);
                TicTacToeState::Splash
            }
            TicTacToeState::Splash if self.splash.expired(self.splash_limit) => {
                self.draw_splash(io.canvas, true);
                self.draw_board_lines(io.canvas);
                self.board.clear();
                TicTacToeState::WaitingFirstMove
            }
            TicTacToeState::Splash => TicTacToeState::Splash,
            TicTacToeState::WaitingFirstMove if touched => {
                self.user_side = Side::Player;
                io.input.clear_stale_touch();
                self.adc.reset();
                TicTacToeState::AdcSettling
            }
            TicTacToeState::WaitingFirstMove if self.first_move.expired(self.first_move_limit) => {
                self.user_side = Side::Opponent;
                TicTacToeState::ComputerTurn
            }
            TicTacToeState::WaitingFirstMove => TicTacToeState::WaitingFirstMove,
            TicTacToeState::AdcSettling if !self.adc.expired(self.adc_settle) => {
                TicTacToeState::AdcSettling
            }
            // Not touched when the settle expired: not a move.
            TicTacToeState::AdcSettling if !touched => TicTacToeState::PlayerTurnWaiting,
            TicTacToeState::AdcSettling => TicTacToeState::EvaluatePlayerMove,
            TicTacToeState::PlayerTurnWaiting if touched => {
                io.input.clear_stale_touch();
                self.adc.reset();
                TicTacToeState::AdcSettling
            }
            TicTacToeState::PlayerTurnWaiting => TicTacToeState::PlayerTurnWaiting,
            TicTacToeState::EvaluatePlayerMove => {
                let played = match self.pending.take() {
                    Some(mv) => self.play(io.canvas, mv, self.user_side),
                    None => false,
                };
                if !played {
                    TicTacToeState::PlayerTurnWaiting
                } else if self.score.is_game_over() {
                    TicTacToeState::EndGame
                } else {
                    TicTacToeState::ComputerTurn
                }
            }
            TicTacToeState::ComputerTurn if self.score.is_game_over() => {
                info!(score = ?self.score, "game over");
                TicTacToeState::EndGame
            }
            TicTacToeState::ComputerTurn => TicTacToeState::PlayerTurnWaiting,
            TicTacToeState::EndGame if io.input.buttons().contains(RESET_BUTTON) => {
                self.reset(io.canvas);
                TicTacToeState::WaitingFirstMove
            }
            TicTacToeState::EndGame => TicTacToeState::EndGame,
        }
    }
}
