use super::StateLabel;
use tracing::debug;

/// Current state of a machine plus the state-change announcer.
///
/// The announcement is a side channel: it fires once on the first tick and
/// afterwards only when the state actually changes.
#[derive(Debug, Clone)]
pub struct StateCell<S> {
    machine: &'static str,
    current: S,
    announced: bool,
    announcements: u32,
}

impl<S: StateLabel> StateCell<S> {
    pub fn new(machine: &'static str, initial: S) -> Self {
        Self {
            machine,
            current: initial,
            announced: false,
            announcements: 0,
        }
    }

    pub fn current(&self) -> S {
        self.current
    }

    pub fn machine(&self) -> &'static str {
        self.machine
    }

    pub fn enter(&mut self, next: S) {
        let changed = next != self.current;
        self.current = next;
        if changed || !self.announced {
            self.announced = true;
            self.announcements += 1;
            debug!(machine = self.machine, state = next.label(), "state");
        }
    }

    pub fn announcements(&self) -> u32 {
        self.announcements
    }
}
