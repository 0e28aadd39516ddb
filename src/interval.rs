//! Parametric ranges for ray t-values.

/// Interval between `min` and `max` used to bound accepted ray distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound of the interval
    pub min: f32,
    /// Upper bound of the interval
    pub max: f32,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Check if the interval surrounds the given value (exclusive bounds).
    ///
    /// This is the test every hit uses: a root exactly on either bound is
    /// rejected. An interval with `min >= max` surrounds nothing.
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }
}
