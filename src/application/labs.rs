use crate::application::Surface;
use crate::application::clock_control::ClockControl;
use crate::application::driver::{Lab, TickProfiler};
use crate::application::simon::{
    ButtonHandler, ControlIo, FlashIo, FlashSequence, SimonControl, SimonSequence, VerifyIo,
    VerifySequence,
};
use crate::application::tictactoe_control::TicTacToeControl;
use crate::config::AppConfig;
use crate::domain::fsm::TickMachine;
use crate::domain::input::InputFrame;
use crate::domain::services::Canvas;
use crate::infrastructure::ai::Minimax;

pub struct ClockLab {
    control: ClockControl,
}

impl ClockLab {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            control: ClockControl::new(&config.clock, config.tick_period(), config.panel()),
        }
    }

    pub fn control(&self) -> &ClockControl {
        &self.control
    }
}

impl Lab for ClockLab {
    fn name(&self) -> &'static str {
        "clock"
    }

    fn start(&mut self, canvas: &mut dyn Canvas) {
        self.control.draw_initial(canvas);
    }

    fn run_period(
        &mut self,
        input: &mut InputFrame,
        canvas: &mut dyn Canvas,
        profiler: &mut TickProfiler<'_>,
    ) {
        let control = &mut self.control;
        profiler.time(control.cell().machine(), || {
            control.tick(&mut Surface { input, canvas })
        });
    }
}

/// The four Simon machines plus the sequence buffer they share.
pub struct SimonLab {
    buttons: ButtonHandler,
    flash: FlashSequence,
    verify: VerifySequence,
    control: SimonControl,
    sequence: SimonSequence,
}

impl SimonLab {
    pub fn new(config: &AppConfig) -> Self {
        let (period, panel) = (config.tick_period(), config.panel());
        let simon = &config.simon;
        Self {
            buttons: ButtonHandler::new(simon.adc_settle_ms, period, panel),
            flash: FlashSequence::new(simon.flash_ms, period, panel),
            verify: VerifySequence::new(simon.input_timeout_ms, period),
            control: SimonControl::new(simon, period, panel),
            sequence: SimonSequence::new(simon.max_sequence_length),
        }
    }

    pub fn buttons(&self) -> &ButtonHandler {
        &self.buttons
    }

    pub fn flash(&self) -> &FlashSequence {
        &self.flash
    }

    pub fn verify(&self) -> &VerifySequence {
        &self.verify
    }

    pub fn control(&self) -> &SimonControl {
        &self.control
    }

    pub fn sequence(&self) -> &SimonSequence {
        &self.sequence
    }
}

impl Lab for SimonLab {
    fn name(&self) -> &'static str {
        "simon"
    }

    fn run_period(
        &mut self,
        input: &mut InputFrame,
        canvas: &mut dyn Canvas,
        profiler: &mut TickProfiler<'_>,
    ) {
        let Self {
            buttons,
            flash,
            verify,
            control,
            sequence,
        } = self;

        profiler.time(buttons.cell().machine(), || {
            buttons.tick(&mut Surface {
                input: &mut *input,
                canvas: &mut *canvas,
            })
        });
        profiler.time(flash.cell().machine(), || {
            flash.tick(&mut FlashIo {
                canvas: &mut *canvas,
                sequence: &*sequence,
            })
        });
        profiler.time(verify.cell().machine(), || {
            verify.tick(&mut VerifyIo {
                buttons: &mut *buttons,
                sequence: &*sequence,
            })
        });
        profiler.time(control.cell().machine(), || {
            control.tick(&mut ControlIo {
                input: &*input,
                canvas,
                flash,
                verify,
                sequence,
            })
        });
    }
}

pub struct TicTacToeLab {
    control: TicTacToeControl,
}

impl TicTacToeLab {
    pub fn new(config: &AppConfig) -> Self {
        let minimax = Minimax::new().with_parallel_root(config.tictactoe.parallel_root);
        Self {
            control: TicTacToeControl::new(
                &config.tictactoe,
                config.tick_period(),
                config.panel(),
                Box::new(minimax),
            ),
        }
    }

    pub fn control(&self) -> &TicTacToeControl {
        &self.control
    }
}

impl Lab for TicTacToeLab {
    fn name(&self) -> &'static str {
        "tictactoe"
    }

    fn run_period(
        &mut self,
        input: &mut InputFrame,
        canvas: &mut dyn Canvas,
        profiler: &mut TickProfiler<'_>,
    ) {
        let control = &mut self.control;
        profiler.time(control.cell().machine(), || {
            control.tick(&mut Surface { input, canvas })
        });
    }
}
