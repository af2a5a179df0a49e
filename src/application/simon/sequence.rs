use crate::domain::geometry::Region;
use rand::Rng;

/// The uncover sequence for one Simon session.
///
/// Owned by the Simon lab. The controller regenerates it and sets the
/// iteration length; the flash and verify machines only read it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimonSequence {
    values: Vec<Region>,
    capacity: usize,
    iteration_length: usize,
}

impl SimonSequence {
    pub fn new(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            capacity,
            iteration_length: 0,
        }
    }

    /// A fixed sequence. The iteration length starts at the full length.
    pub fn from_regions(values: Vec<Region>) -> Self {
        let capacity = values.len();
        Self {
            iteration_length: capacity,
            values,
            capacity,
        }
    }

    /// Refill the whole buffer with fresh draws from `rng`.
    pub fn regenerate<R: Rng>(&mut self, rng: &mut R) {
        self.values.clear();
        self.values.extend((0..self.capacity).filter_map(|_| {
            Region::from_index(rng.gen_range(0..Region::ALL.len()))
        }));
    }

    pub fn value(&self, index: usize) -> Option<Region> {
        self.values.get(index).copied()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iteration_length(&self) -> usize {
        self.iteration_length
    }

    /// Clamped to the buffer capacity.
    pub fn set_iteration_length(&mut self, length: usize) {
        self.iteration_length = length.min(self.capacity);
    }

    pub fn regions(&self) -> &[Region] {
        &self.values
    }
}
