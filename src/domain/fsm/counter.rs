use std::num::NonZeroU32;

/// Fixed scheduler period in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickPeriod(NonZeroU32);

impl TickPeriod {
    pub const DEFAULT: TickPeriod = match NonZeroU32::new(50) {
        Some(ms) => TickPeriod(ms),
        None => unreachable!(),
    };

    pub fn from_millis(ms: u32) -> Option<Self> {
        NonZeroU32::new(ms).map(Self)
    }

    pub fn millis(&self) -> u32 {
        self.0.get()
    }

    /// `duration_ms / period_ms`, truncating.
    pub fn ticks_for(&self, duration_ms: u32) -> u32 {
        duration_ms / self.0.get()
    }

    pub fn at_least(&self, duration_ms: u32) -> Threshold {
        Threshold::new(self.ticks_for(duration_ms), Expiry::AtLeast)
    }

    pub fn beyond(&self, duration_ms: u32) -> Threshold {
        Threshold::new(self.ticks_for(duration_ms), Expiry::Beyond)
    }
}

impl Default for TickPeriod {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Comparator a guard applies between a counter and its limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expiry {
    /// `counter >= ticks`
    AtLeast,
    /// `counter > ticks`
    Beyond,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Threshold {
    ticks: u32,
    expiry: Expiry,
}

impl Threshold {
    pub const fn new(ticks: u32, expiry: Expiry) -> Self {
        Self { ticks, expiry }
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn expiry(&self) -> Expiry {
        self.expiry
    }

    pub fn is_met(&self, counter: TickCounter) -> bool {
        match self.expiry {
            Expiry::AtLeast => counter.value() >= self.ticks,
            Expiry::Beyond => counter.value() > self.ticks,
        }
    }
}

/// Ticks spent in a state. Reset on entry, advanced once per tick of
/// residency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickCounter(u32);

impl TickCounter {
    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn advance(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }

    pub fn expired(&self, threshold: Threshold) -> bool {
        threshold.is_met(*self)
    }
}
