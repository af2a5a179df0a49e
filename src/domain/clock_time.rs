use std::fmt;

const MAX_HOURS: u8 = 12;
const MIN_HOURS: u8 = 1;
const MAX_MINUTES: u8 = 59;
const MAX_SECONDS: u8 = 59;

/// Which field a touch adjusts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeField {
    Hours,
    Minutes,
    Seconds,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Adjustment {
    Increment(TimeField),
    Decrement(TimeField),
}

/// Twelve-hour wall time. Carries cascade upward on both increment and
/// decrement: seconds into minutes, minutes into hours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl Default for ClockTime {
    fn default() -> Self {
        Self {
            hours: MIN_HOURS,
            minutes: 0,
            seconds: 0,
        }
    }
}

impl ClockTime {
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Option<Self> {
        let valid = (MIN_HOURS..=MAX_HOURS).contains(&hours)
            && minutes <= MAX_MINUTES
            && seconds <= MAX_SECONDS;
        valid.then_some(Self {
            hours,
            minutes,
            seconds,
        })
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    pub fn apply(&mut self, adjustment: Adjustment) {
        match adjustment {
            Adjustment::Increment(TimeField::Hours) => self.increment_hours(),
            Adjustment::Increment(TimeField::Minutes) => self.increment_minutes(),
            Adjustment::Increment(TimeField::Seconds) => self.increment_seconds(),
            Adjustment::Decrement(TimeField::Hours) => self.decrement_hours(),
            Adjustment::Decrement(TimeField::Minutes) => self.decrement_minutes(),
            Adjustment::Decrement(TimeField::Seconds) => self.decrement_seconds(),
        }
    }

    pub fn advance_one_second(&mut self) {
        self.increment_seconds();
    }

    fn increment_hours(&mut self) {
        self.hours = if self.hours < MAX_HOURS {
            self.hours + 1
        } else {
            MIN_HOURS
        };
    }

    fn increment_minutes(&mut self) {
        if self.minutes < MAX_MINUTES {
            self.minutes += 1;
        } else {
            self.minutes = 0;
            self.increment_hours();
        }
    }

    fn increment_seconds(&mut self) {
        if self.seconds < MAX_SECONDS {
            self.seconds += 1;
        } else {
            self.seconds = 0;
            self.increment_minutes();
        }
    }

    fn decrement_hours(&mut self) {
        self.hours = if self.hours > MIN_HOURS {
            self.hours - 1
        } else {
            MAX_HOURS
        };
    }

    fn decrement_minutes(&mut self) {
        if self.minutes > 0 {
            self.minutes -= 1;
        } else {
            self.minutes = MAX_MINUTES;
            self.decrement_hours();
        }
    }

    fn decrement_seconds(&mut self) {
        if self.seconds > 0 {
            self.seconds -= 1;
        } else {
            self.seconds = MAX_SECONDS;
            self.decrement_minutes();
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one_oclock() {
        assert_eq!(ClockTime::default().to_string(), "01:00:00");
    }

    #[test]
    fn test_second_rollover_cascades_to_hours() {
        let mut t = ClockTime::new(12, 59, 59).unwrap();
        t.advance_one_second();
        assert_eq!(t, ClockTime::new(1, 0, 0).unwrap());
    }

    #[test]
    fn test_decrement_cascades_downward() {
        let mut t = ClockTime::new(1, 0, 0).unwrap();
        t.apply(Adjustment::Decrement(TimeField::Seconds));
        assert_eq!(t, ClockTime::new(12, 59, 59).unwrap());
    }

    #[test]
    fn test_hours_wrap_without_touching_minutes() {
        let mut t = ClockTime::new(12, 30, 15).unwrap();
        t.apply(Adjustment::Increment(TimeField::Hours));
        assert_eq!(t.to_string(), "01:30:15");
        t.apply(Adjustment::Decrement(TimeField::Hours));
        assert_eq!(t.to_string(), "12:30:15");
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(ClockTime::new(0, 0, 0).is_none());
        assert!(ClockTime::new(13, 0, 0).is_none());
        assert!(ClockTime::new(1, 60, 0).is_none());
    }
}
