use serde::{Deserialize, Serialize};

/// A range of ray distances, used as the `(min, max)` window of a visibility query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if the interval contains no values.
    pub fn is_empty(&self) -> bool {
        self.min.is_nan() || self.max.is_nan() || self.min >= self.max
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));

        assert!(interval.surrounds(5.0));
        assert!(interval.surrounds(0.1));
        assert!(interval.surrounds(9.9));
        assert!(!interval.surrounds(f32::NAN));
    }

    #[test]
    fn test_interval_empty() {
        assert!(Interval::new(3.0, 3.0).is_empty());
        assert!(Interval::new(5.0, 1.0).is_empty());
        assert!(Interval::new(f32::NAN, 1.0).is_empty());
        assert!(!Interval::new(0.0, 1000.0).is_empty());
    }
}
