use crate::domain::fsm::TickPeriod;
use crate::domain::input::InputFrame;
use crate::domain::services::{Canvas, Clock, InputSurface};
use std::time::Duration;
use tracing::{info, trace};

/// One timed tick function call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickSample {
    pub machine: &'static str,
    pub period: u64,
    pub duration: Duration,
}

/// Times every tick call of one period against the elapsed-time clock and
/// keeps the slowest.
pub struct TickProfiler<'c> {
    clock: &'c dyn Clock,
    period: u64,
    slowest: Option<TickSample>,
}

impl<'c> TickProfiler<'c> {
    pub fn new(clock: &'c dyn Clock, period: u64) -> Self {
        Self {
            clock,
            period,
            slowest: None,
        }
    }

    pub fn time<R>(&mut self, machine: &'static str, f: impl FnOnce() -> R) -> R {
        let started = self.clock.now();
        let result = f();
        let duration = self.clock.now().saturating_sub(started);
        trace!(machine, ?duration, "tick");
        if self.slowest.is_none_or(|s| duration > s.duration) {
            self.slowest = Some(TickSample {
                machine,
                period: self.period,
                duration,
            });
        }
        result
    }

    pub fn slowest(&self) -> Option<TickSample> {
        self.slowest
    }
}

/// A set of machines ticked together in a fixed order every period.
pub trait Lab {
    fn name(&self) -> &'static str;

    /// Called once before the first period.
    fn start(&mut self, _canvas: &mut dyn Canvas) {}

    fn run_period(
        &mut self,
        input: &mut InputFrame,
        canvas: &mut dyn Canvas,
        profiler: &mut TickProfiler<'_>,
    );
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub periods: u64,
    pub slowest: Option<TickSample>,
}

/// The fixed-period scheduler: the software stand-in for the timer
/// interrupt that drives every lab.
pub struct Driver<L, I, C, K> {
    lab: L,
    input: I,
    canvas: C,
    clock: K,
    period: TickPeriod,
    realtime: bool,
    periods: u64,
    slowest: Option<TickSample>,
}

impl<L, I, C, K> Driver<L, I, C, K>
where
    L: Lab,
    I: InputSurface,
    C: Canvas,
    K: Clock,
{
    pub fn new(lab: L, input: I, canvas: C, clock: K, period: TickPeriod) -> Self {
        Self {
            lab,
            input,
            canvas,
            clock,
            period,
            realtime: false,
            periods: 0,
            slowest: None,
        }
    }

    /// Sleep out the rest of each period instead of running flat out.
    pub fn with_realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }

    /// Run one period: refresh and snapshot the input, tick the lab, then
    /// forward any stale-touch clear the machines asked for.
    pub fn step(&mut self) {
        let started = self.clock.now();
        if self.periods == 0 {
            self.lab.start(&mut self.canvas);
        }

        self.input.refresh();
        let mut frame = InputFrame::capture(&self.input);
        let mut profiler = TickProfiler::new(&self.clock, self.periods);
        self.lab
            .run_period(&mut frame, &mut self.canvas, &mut profiler);

        if frame.stale_touch_cleared() {
            self.input.clear_stale_touch();
        }
        if let Some(sample) = profiler.slowest() {
            if self.slowest.is_none_or(|s| sample.duration > s.duration) {
                self.slowest = Some(sample);
            }
        }
        self.periods += 1;

        if self.realtime {
            let budget = Duration::from_millis(u64::from(self.period.millis()));
            let spent = self.clock.now().saturating_sub(started);
            if let Some(remaining) = budget.checked_sub(spent) {
                std::thread::sleep(remaining);
            }
        }
    }

    pub fn run(&mut self, periods: u64) -> RunSummary {
        for _ in 0..periods {
            self.step();
        }
        let summary = self.summary();
        match summary.slowest {
            Some(sample) => info!(
                lab = self.lab.name(),
                periods = summary.periods,
                slowest_machine = sample.machine,
                slowest_period = sample.period,
                slowest = ?sample.duration,
                "run complete"
            ),
            None => info!(lab = self.lab.name(), periods = summary.periods, "run complete"),
        }
        summary
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            periods: self.periods,
            slowest: self.slowest,
        }
    }

    pub fn lab(&self) -> &L {
        &self.lab
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }
}
