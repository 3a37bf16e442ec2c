use rand::Rng;
use thiserror::Error;

/// The sampling domain of one solver variable: `lower ≤ x < upper`.
///
/// Initial individuals and mutations draw each coordinate uniformly from its
/// bounds. Crossover only recombines existing coordinates, so every individual
/// the solver produces lies inside the bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    lower: f64,
    upper: f64,
}

/// Errors that can occur when constructing [`Bounds`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BoundsError {
    #[error("bounds [{lower}, {upper}) must be finite with a finite width")]
    NonFinite { lower: f64, upper: f64 },

    #[error("lower bound {lower} must be less than upper bound {upper}")]
    Empty { lower: f64, upper: f64 },
}

impl Bounds {
    /// Creates bounds for one solver variable.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound or the width is not finite, or if
    /// `lower` is not strictly less than `upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, BoundsError> {
        if !lower.is_finite() || !upper.is_finite() || !(upper - lower).is_finite() {
            return Err(BoundsError::NonFinite { lower, upper });
        }
        if lower >= upper {
            return Err(BoundsError::Empty { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns `true` if `x` lies in `[lower, upper)`.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.lower && x < self.upper
    }

    pub(super) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.lower..self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn rejects_empty_and_reversed() {
        assert!(matches!(Bounds::new(1.0, 1.0), Err(BoundsError::Empty { .. })));
        assert!(matches!(Bounds::new(2.0, 1.0), Err(BoundsError::Empty { .. })));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            Bounds::new(f64::NAN, 1.0),
            Err(BoundsError::NonFinite { .. })
        ));
        assert!(matches!(
            Bounds::new(0.0, f64::INFINITY),
            Err(BoundsError::NonFinite { .. })
        ));
        assert!(matches!(
            Bounds::new(-f64::MAX, f64::MAX),
            Err(BoundsError::NonFinite { .. })
        ));
    }

    #[test]
    fn samples_stay_inside() {
        let bounds = Bounds::new(10.0, 10_000.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1_000 {
            assert!(bounds.contains(bounds.sample(&mut rng)));
        }
    }
}
