/// Enable flag one machine raises and lowers on another.
///
/// The producer keeps ticking either way; it only makes progress while
/// enabled and cleans itself up on the first tick after being disabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Interlock {
    enabled: bool,
}

impl Interlock {
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
