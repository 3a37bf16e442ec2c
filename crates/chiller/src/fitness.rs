/// Fitness reported for an exact fit.
///
/// Any error at or below `1 / MAX_FITNESS` scores this value, so a perfect
/// candidate never produces an infinite score.
pub const MAX_FITNESS: f64 = 1e12;

/// Fitness reported for a candidate that could not be evaluated.
pub const WORST_FITNESS: f64 = 0.0;

/// Converts a residual error into a fitness score, where higher is better.
///
/// The score is `1 / error`, clamped to [`MAX_FITNESS`]. It is finite for
/// every input and strictly decreasing in `error` above `1 / MAX_FITNESS`.
/// A NaN error scores [`WORST_FITNESS`].
pub fn fitness(error: f64) -> f64 {
    if error.is_nan() {
        WORST_FITNESS
    } else if error <= 1.0 / MAX_FITNESS {
        MAX_FITNESS
    } else {
        1.0 / error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn inverse_of_error() {
        assert_relative_eq!(fitness(0.5), 2.0);
        assert_relative_eq!(fitness(0.01), 100.0, max_relative = 1e-12);
        assert_relative_eq!(fitness(4.0), 0.25);
    }

    #[test]
    fn zero_error_is_clamped() {
        assert_eq!(fitness(0.0), MAX_FITNESS);
        assert_eq!(fitness(1e-15), MAX_FITNESS);
        assert_eq!(fitness(1e-12), MAX_FITNESS);
        assert!(fitness(2e-12) < MAX_FITNESS);
    }

    #[test]
    fn strictly_decreasing_and_finite() {
        let errors = [2e-12, 1e-9, 1e-6, 1e-3, 0.1, 0.5, 1.0, 10.0, 1e6];
        for pair in errors.windows(2) {
            assert!(fitness(pair[0]) > fitness(pair[1]), "{pair:?}");
        }
        for error in errors {
            assert!(fitness(error).is_finite());
        }
        assert!(fitness(f64::INFINITY).is_finite());
    }

    #[test]
    fn nan_error_is_worst() {
        assert_eq!(fitness(f64::NAN), WORST_FITNESS);
    }
}
