use crate::application::driver::{Driver, Lab, RunSummary};
use crate::application::labs::{ClockLab, SimonLab, TicTacToeLab};
use crate::config::AppConfig;
use crate::domain::geometry::{Panel, TouchPoint};
use crate::domain::input::ButtonMask;
use crate::domain::fsm::TickMachine as _;
use crate::infrastructure::canvas::RecordingCanvas;
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::display::render_board;
use crate::infrastructure::input::ScriptedInput;
use derive_more::{Display, Error};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabKind {
    Clock,
    Simon,
    TicTacToe,
}

#[derive(Debug, Display, Error)]
#[display("unknown lab '{name}', expected one of: clock, simon, tictactoe")]
pub struct UnknownLab {
    name: String,
}

impl FromStr for LabKind {
    type Err = UnknownLab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clock" => Ok(LabKind::Clock),
            "simon" => Ok(LabKind::Simon),
            "tictactoe" | "ttt" => Ok(LabKind::TicTacToe),
            _ => Err(UnknownLab { name: s.to_string() }),
        }
    }
}

fn press_at(panel: Panel, x_fraction: i16, y_fraction: i16) -> TouchPoint {
    TouchPoint::new(
        panel.width * x_fraction / 6,
        panel.height * y_fraction / 6,
        1,
    )
}

/// A short scripted session for each lab, so a headless run exercises the
/// interesting states.
pub fn demo_script(kind: LabKind, config: &AppConfig) -> ScriptedInput {
    let panel = config.panel();
    let period = config.tick_period();
    let ticks = |ms: u32| period.ticks_for(ms) + 2;
    match kind {
        LabKind::Clock => ScriptedInput::new()
            .idle(ticks(1000))
            .touch(press_at(panel, 1, 1), 2)
            .idle(ticks(1000))
            .touch(press_at(panel, 3, 1), ticks(1500))
            .idle(ticks(3000))
            .touch(press_at(panel, 5, 5), 2),
        LabKind::Simon => ScriptedInput::new()
            .idle(ticks(500))
            .touch(press_at(panel, 3, 3), 2)
            .idle(ticks(config.simon.flash_ms) * 2)
            .touch(press_at(panel, 1, 1), 3),
        LabKind::TicTacToe => ScriptedInput::new()
            .idle(ticks(config.tictactoe.splash_ms) + ticks(config.tictactoe.first_move_ms))
            .touch(press_at(panel, 1, 1), 3)
            .idle(4)
            .touch(press_at(panel, 5, 1), 3)
            .idle(4)
            .touch(press_at(panel, 1, 5), 3)
            .idle(4)
            .touch(press_at(panel, 5, 5), 3)
            .idle(4)
            .press(ButtonMask::BTN0, 1),
    }
}

pub struct ConsoleInterface;

impl ConsoleInterface {
    pub fn run(kind: LabKind, config: &AppConfig, periods: u64) {
        let input = demo_script(kind, config);
        match kind {
            LabKind::Clock => {
                let driver = Self::drive(ClockLab::new(config), input, config, periods);
                println!("Clock reads {}", driver.lab().control().time());
            }
            LabKind::Simon => {
                let driver = Self::drive(SimonLab::new(config), input, config, periods);
                let lab = driver.lab();
                println!(
                    "Simon is in {:?}, session length {}, iteration {}",
                    lab.control().state(),
                    lab.control().session_length(),
                    lab.control().iteration_length()
                );
            }
            LabKind::TicTacToe => {
                let driver = Self::drive(TicTacToeLab::new(config), input, config, periods);
                let control = driver.lab().control();
                println!("{}", render_board(control.board()));
                println!(
                    "Tic-tac-toe is in {:?}, score {:?}",
                    control.state(),
                    control.score()
                );
            }
        }
    }

    fn drive<L: Lab>(
        lab: L,
        input: ScriptedInput,
        config: &AppConfig,
        periods: u64,
    ) -> Driver<L, ScriptedInput, RecordingCanvas, SystemClock> {
        println!("Running {} for {} periods...", lab.name(), periods);
        let mut driver = Driver::new(
            lab,
            input,
            RecordingCanvas::new(),
            SystemClock::new(),
            config.tick_period(),
        )
        .with_realtime(config.timing.realtime);
        let summary = driver.run(periods);
        Self::print_summary(&summary, driver.canvas());
        driver
    }

    fn print_summary(summary: &RunSummary, canvas: &RecordingCanvas) {
        println!("Periods: {}", summary.periods);
        println!("Draw calls: {}", canvas.ops().len());
        if let Some(slowest) = summary.slowest {
            println!(
                "Slowest tick: {} in period {} ({:?})",
                slowest.machine, slowest.period, slowest.duration
            );
        }
    }
}
