use crate::application::Surface;
use crate::config::ClockConfig;
use crate::domain::clock_time::ClockTime;
use crate::domain::fsm::{StateCell, StateLabel, Threshold, TickCounter, TickMachine, TickPeriod};
use crate::domain::geometry::{Color, Panel, Point};
use crate::domain::services::Canvas;

const TEXT_SIZE: u8 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockState {
    Init,
    /// Clock stopped until the first touch sets it.
    NeverTouched,
    WaitingForTouch,
    AdcSettling,
    AutoRepeatDelay,
    FastRepeatTiming,
    FastRepeatFire,
    AdvanceSecond,
}

impl StateLabel for ClockState {
    fn label(self) -> &'static str {
        match self {
            ClockState::Init => "init_st",
            ClockState::NeverTouched => "never_touched_st",
            ClockState::WaitingForTouch => "waiting_for_touch_st",
            ClockState::AdcSettling => "adc_settling_st",
            ClockState::AutoRepeatDelay => "auto_repeat_delay_st",
            ClockState::FastRepeatTiming => "fast_repeat_timing_st",
            ClockState::FastRepeatFire => "fast_repeat_fire_st",
            ClockState::AdvanceSecond => "advance_second_st",
        }
    }
}

/// Touch-set twelve-hour clock with tiered auto-repeat.
pub struct ClockControl {
    cell: StateCell<ClockState>,
    panel: Panel,
    time: ClockTime,
    adc: TickCounter,
    auto: TickCounter,
    rate: TickCounter,
    second: TickCounter,
    adc_settle: Threshold,
    auto_repeat_delay: Threshold,
    repeat_interval: Threshold,
    one_second: Threshold,
}

impl ClockControl {
    pub fn new(config: &ClockConfig, period: TickPeriod, panel: Panel) -> Self {
        Self {
            cell: StateCell::new("clock_control", ClockState::Init),
            panel,
            time: ClockTime::default(),
            adc: TickCounter::default(),
            auto: TickCounter::default(),
            rate: TickCounter::default(),
            second: TickCounter::default(),
            adc_settle: period.at_least(config.adc_settle_ms),
            auto_repeat_delay: period.at_least(config.auto_repeat_delay_ms),
            repeat_interval: period.at_least(config.repeat_interval_ms),
            one_second: period.at_least(config.second_ms),
        }
    }

    pub fn time(&self) -> ClockTime {
        self.time
    }

    /// Draws the time for the first time. Later updates are drawn by the
    /// machine itself.
    pub fn draw_initial(&self, canvas: &mut dyn Canvas) {
        self.render(canvas);
    }

    fn adjust(&mut self, io: &mut Surface<'_>) {
        let at = io.input.touch_point().position();
        self.time.apply(self.panel.clock_adjustment(at));
        self.render(io.canvas);
    }

    fn tick_second(&mut self, io: &mut Surface<'_>) {
        self.time.advance_one_second();
        self.render(io.canvas);
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        let text_size = i16::from(TEXT_SIZE);
        let origin = Point::new(self.panel.width / 8, self.panel.height / 2 - 3 * text_size);
        canvas.fill_rect(
            origin,
            (i32::from(self.panel.width) * 3 / 4) as i16,
            8 * text_size,
            Color::Black,
        );
        canvas.set_cursor(origin);
        canvas.print_text(&self.time.to_string(), TEXT_SIZE, Color::Red);
    }
}

impl TickMachine for ClockControl {
    type State = ClockState;
    type Io<'a> = Surface<'a>;

    fn cell(&self) -> &StateCell<ClockState> {
        &self.cell
    }

    fn cell_mut(&mut self) -> &mut StateCell<ClockState> {
        &mut self.cell
    }

    fn act(&mut self, _io: &mut Surface<'_>) {
        match self.state() {
            ClockState::Init => {}
            ClockState::NeverTouched => {
                self.adc.reset();
                self.auto.reset();
                self.rate.reset();
                self.second.reset();
            }
            ClockState::WaitingForTouch => {
                self.adc.reset();
                self.auto.reset();
                self.rate.reset();
                self.second.advance();
            }
            ClockState::AdcSettling => self.adc.advance(),
            ClockState::AutoRepeatDelay => self.auto.advance(),
            ClockState::FastRepeatTiming => self.rate.advance(),
            ClockState::FastRepeatFire => self.rate.reset(),
            ClockState::AdvanceSecond => self.second.reset(),
        }
    }

    fn advance(&mut self, io: &mut Surface<'_>) -> ClockState {
        let touched = io.input.is_touched();
        match self.state() {
            ClockState::Init => ClockState::NeverTouched,
            ClockState::NeverTouched | ClockState::WaitingForTouch if touched => {
                io.input.clear_stale_touch();
                ClockState::AdcSettling
            }
            ClockState::NeverTouched => ClockState::NeverTouched,
            ClockState::WaitingForTouch if self.second.expired(self.one_second) => {
                ClockState::AdvanceSecond
            }
            ClockState::WaitingForTouch => ClockState::WaitingForTouch,
            ClockState::AdcSettling if !self.adc.expired(self.adc_settle) => {
                ClockState::AdcSettling
            }
            ClockState::AdcSettling if !touched => {
                self.adjust(io);
                ClockState::WaitingForTouch
            }
            ClockState::AdcSettling => ClockState::AutoRepeatDelay,
            ClockState::AutoRepeatDelay if !touched => {
                self.adjust(io);
                ClockState::WaitingForTouch
            }
            ClockState::AutoRepeatDelay if self.auto.expired(self.auto_repeat_delay) => {
                self.adjust(io);
                ClockState::FastRepeatTiming
            }
            ClockState::AutoRepeatDelay => ClockState::AutoRepeatDelay,
            ClockState::FastRepeatTiming if !touched => ClockState::WaitingForTouch,
            ClockState::FastRepeatTiming if self.rate.expired(self.repeat_interval) => {
                ClockState::FastRepeatFire
            }
            ClockState::FastRepeatTiming => ClockState::FastRepeatTiming,
            ClockState::FastRepeatFire if !touched => ClockState::WaitingForTouch,
            ClockState::FastRepeatFire => {
                self.adjust(io);
                ClockState::FastRepeatTiming
            }
            ClockState::AdvanceSecond => {
                self.tick_second(io);
                ClockState::WaitingForTouch
            }
        }
    }
}
