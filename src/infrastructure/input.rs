use crate::domain::geometry::TouchPoint;
use crate::domain::input::ButtonMask;
use crate::domain::services::InputSurface;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Contact {
    Idle,
    Touch(TouchPoint),
    Press(ButtonMask),
}

#[derive(Clone, Copy, Debug)]
struct Segment {
    contact: Contact,
    periods: u32,
}

/// Replayable input surface: a script of idle, touch and button segments,
/// each lasting a number of periods. Idle once the script runs out.
///
/// Like a real touch controller, the last contact point stays latched after
/// release.
#[derive(Debug)]
pub struct ScriptedInput {
    script: VecDeque<Segment>,
    current: Contact,
    latched: TouchPoint,
    stale_clears: usize,
}

impl Default for ScriptedInput {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            current: Contact::Idle,
            latched: TouchPoint::default(),
            stale_clears: 0,
        }
    }

    pub fn idle(self, periods: u32) -> Self {
        self.then(Contact::Idle, periods)
    }

    pub fn touch(self, at: TouchPoint, periods: u32) -> Self {
        self.then(Contact::Touch(at), periods)
    }

    pub fn press(self, buttons: ButtonMask, periods: u32) -> Self {
        self.then(Contact::Press(buttons), periods)
    }

    fn then(mut self, contact: Contact, periods: u32) -> Self {
        if periods > 0 {
            self.script.push_back(Segment { contact, periods });
        }
        self
    }

    /// Periods left in the script.
    pub fn remaining(&self) -> u64 {
        self.script.iter().map(|s| u64::from(s.periods)).sum()
    }

    pub fn stale_clears(&self) -> usize {
        self.stale_clears
    }
}

impl InputSurface for ScriptedInput {
    fn refresh(&mut self) {
        self.current = match self.script.front_mut() {
            Some(segment) => {
                segment.periods -= 1;
                let contact = segment.contact;
                if segment.periods == 0 {
                    self.script.pop_front();
                }
                contact
            }
            None => Contact::Idle,
        };
        if let Contact::Touch(at) = self.current {
            self.latched = at;
        }
    }

    fn is_touched(&self) -> bool {
        matches!(self.current, Contact::Touch(_))
    }

    fn touch_point(&self) -> TouchPoint {
        self.latched
    }

    fn clear_stale_touch(&mut self) {
        self.stale_clears += 1;
    }

    fn read_buttons(&self) -> ButtonMask {
        match self.current {
            Contact::Press(buttons) => buttons,
            _ => ButtonMask::NONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_plays_in_order_then_idles() {
        let at = TouchPoint::new(10, 20, 1);
        let mut input = ScriptedInput::new()
            .touch(at, 2)
            .press(ButtonMask::BTN0, 1);
        assert_eq!(input.remaining(), 3);

        input.refresh();
        assert!(input.is_touched());
        input.refresh();
        assert!(input.is_touched());
        input.refresh();
        assert!(!input.is_touched());
        assert!(input.read_buttons().contains(ButtonMask::BTN0));
        assert_eq!(input.touch_point(), at);
        input.refresh();
        assert_eq!(input.read_buttons(), ButtonMask::NONE);
        assert_eq!(input.remaining(), 0);
    }
}
