/// A candidate point with its evaluated objective.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Individual<const N: usize> {
    /// The solver variables.
    pub x: [f64; N],

    /// The objective at `x`, or `None` if the individual is invalid.
    ///
    /// An individual is invalid when its evaluation failed or an observer
    /// returned [`Action::AssumeWorse`](super::Action::AssumeWorse).
    pub objective: Option<f64>,
}

impl<const N: usize> Individual<N> {
    pub(super) fn valid(x: [f64; N], objective: f64) -> Self {
        Self {
            x,
            objective: Some(objective),
        }
    }

    pub(super) fn invalid(x: [f64; N]) -> Self {
        Self { x, objective: None }
    }

    /// Returns `true` if the individual has an objective.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.objective.is_some()
    }

    /// Returns `true` if `self` ranks strictly ahead of `other`.
    ///
    /// A valid individual always ranks ahead of an invalid one, even when its
    /// transformed objective is `+∞`. Two invalid individuals tie.
    pub(super) fn beats<F: Fn(f64) -> f64>(&self, other: &Self, transform: &F) -> bool {
        match (self.objective, other.objective) {
            (Some(mine), Some(theirs)) => transform(mine) < transform(theirs),
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_beats_invalid_at_any_objective() {
        let worst_possible = Individual::valid([0.0], f64::NEG_INFINITY);
        let invalid = Individual::invalid([1.0]);
        let maximizing = |v: f64| -v;

        assert!(worst_possible.beats(&invalid, &maximizing));
        assert!(!invalid.beats(&worst_possible, &maximizing));
        assert!(!invalid.beats(&invalid, &maximizing));
    }

    #[test]
    fn ranking_follows_the_transform() {
        let low = Individual::valid([0.0], 1.0);
        let high = Individual::valid([1.0], 2.0);

        assert!(low.beats(&high, &|v: f64| v));
        assert!(high.beats(&low, &|v: f64| -v));
        assert!(!low.beats(&low, &|v: f64| v));
    }
}
