use super::view;
use crate::application::Surface;
use crate::domain::fsm::{
    Interlock, StateCell, StateLabel, Threshold, TickCounter, TickMachine, TickPeriod,
};
use crate::domain::geometry::{Panel, Region};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonState {
    Init,
    WaitingForTouch,
    AdcSettling,
    Touching,
    End,
}

impl StateLabel for ButtonState {
    fn label(self) -> &'static str {
        match self {
            ButtonState::Init => "init_st",
            ButtonState::WaitingForTouch => "waiting_for_touch_st",
            ButtonState::AdcSettling => "adc_counter_running_st",
            ButtonState::Touching => "is_touching_st",
            ButtonState::End => "end_st",
        }
    }
}

/// Resolves a touch into one of the four Simon regions and pulses
/// `release_detected` for one tick when the finger lifts.
pub struct ButtonHandler {
    cell: StateCell<ButtonState>,
    interlock: Interlock,
    panel: Panel,
    adc: TickCounter,
    adc_settle: Threshold,
    region: Option<Region>,
    release_detected: bool,
}

impl ButtonHandler {
    pub fn new(adc_settle_ms: u32, period: TickPeriod, panel: Panel) -> Self {
        Self {
            cell: StateCell::new("button_handler", ButtonState::Init),
            interlock: Interlock::default(),
            panel,
            adc: TickCounter::default(),
            adc_settle: period.at_least(adc_settle_ms),
            region: None,
            release_detected: false,
        }
    }

    pub fn enable(&mut self) {
        self.interlock.enable();
    }

    pub fn disable(&mut self) {
        self.interlock.disable();
    }

    pub fn is_enabled(&self) -> bool {
        self.interlock.is_enabled()
    }

    pub fn release_detected(&self) -> bool {
        self.release_detected
    }

    /// Region of the last touch that survived the ADC settle.
    pub fn region(&self) -> Option<Region> {
        self.region
    }

    fn clear(&mut self) {
        self.adc.reset();
        self.region = None;
        self.release_detected = false;
    }
}

impl TickMachine for ButtonHandler {
    type State = ButtonState;
    type Io<'a> = Surface<'a>;

    fn cell(&self) -> &StateCell<ButtonState> {
        &self.cell
    }

    fn cell_mut(&mut self) -> &mut StateCell<ButtonState> {
        &mut self.cell
    }

    fn act(&mut self, _io: &mut Surface<'_>) {
        match self.state() {
            ButtonState::Init | ButtonState::End => {}
            ButtonState::WaitingForTouch => {
                self.adc.reset();
                self.release_detected = false;
            }
            ButtonState::AdcSettling => self.adc.advance(),
            ButtonState::Touching => self.adc.reset(),
        }
    }

    fn advance(&mut self, io: &mut Surface<'_>) -> ButtonState {
        let state = self.state();
        if !self.interlock.is_enabled() {
            if let (ButtonState::Touching, Some(region)) = (state, self.region) {
                view::draw_square(io.canvas, &self.panel, region, true);
            }
            self.clear();
            return ButtonState::Init;
        }

        let touched = io.input.is_touched();
        match state {
            ButtonState::Init => ButtonState::WaitingForTouch,
            ButtonState::WaitingForTouch if touched => {
                io.input.clear_stale_touch();
                ButtonState::AdcSettling
            }
            ButtonState::WaitingForTouch => ButtonState::WaitingForTouch,
            ButtonState::AdcSettling if !touched => ButtonState::WaitingForTouch,
            ButtonState::AdcSettling if self.adc.expired(self.adc_settle) => {
                let region = self.panel.quadrant(io.input.touch_point().position());
                self.region = Some(region);
                view::draw_square(io.canvas, &self.panel, region, false);
                ButtonState::Touching
            }
            ButtonState::AdcSettling => ButtonState::AdcSettling,
            ButtonState::Touching if !touched => {
                if let Some(region) = self.region {
                    view::draw_square(io.canvas, &self.panel, region, true);
                    view::draw_button(io.canvas, &self.panel, region);
                }
                self.release_detected = true;
                ButtonState::WaitingForTouch
            }
            ButtonState::Touching => ButtonState::Touching,
            ButtonState::End => ButtonState::End,
        }
    }
}
