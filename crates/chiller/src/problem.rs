use std::convert::Infallible;

use refit_core::OptimizationProblem;
use refit_solvers::optimization::genetic::Bounds;

use crate::{CandidateEffectiveness, ReferencePair, TargetEffectiveness, fitness};

/// Sampling domain of the reference efficacy.
pub const EFFICACY_DOMAIN: (f64, f64) = (0.01, 0.99);

/// Sampling domain of the reference capacity, in W/K.
pub const CAPACITY_DOMAIN: (f64, f64) = (10.0, 10_000.0);

/// Fits a [`ReferencePair`] so the correlation reproduces both targets.
///
/// Solver variables are `x = [efficacy, capacity_w_per_k]`. The objective is
/// the [`fitness`] of the mean absolute error, meant to be maximized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceFit {
    targets: TargetEffectiveness,
}

impl ReferenceFit {
    /// Creates a fit against the given targets.
    pub fn new(targets: TargetEffectiveness) -> Self {
        Self { targets }
    }

    /// Returns the targets being fitted.
    pub fn targets(&self) -> &TargetEffectiveness {
        &self.targets
    }

    /// Sampling bounds for `[efficacy, capacity_w_per_k]`.
    pub fn bounds() -> [Bounds; 2] {
        // Known-good constants, unwrap is safe.
        [
            Bounds::new(EFFICACY_DOMAIN.0, EFFICACY_DOMAIN.1).unwrap(),
            Bounds::new(CAPACITY_DOMAIN.0, CAPACITY_DOMAIN.1).unwrap(),
        ]
    }
}

impl OptimizationProblem<2> for ReferenceFit {
    type Input = ReferencePair;
    type Output = CandidateEffectiveness;
    type Error = Infallible;

    fn input(&self, x: &[f64; 2]) -> Result<Self::Input, Self::Error> {
        Ok(ReferencePair::new(x[0], x[1]))
    }

    fn objective(&self, _input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error> {
        Ok(fitness(self.targets.error(output)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermal_conductance::watt_per_kelvin;

    use crate::{EffectivenessModel, MAX_FITNESS};

    #[test]
    fn input_maps_variables_in_order() {
        let fit = ReferenceFit::new(EffectivenessModel::default().targets());
        let pair = fit.input(&[0.4, 250.0]).unwrap();

        assert_relative_eq!(pair.efficacy, 0.4);
        assert_relative_eq!(pair.capacity.get::<watt_per_kelvin>(), 250.0);
    }

    #[test]
    fn exact_match_scores_max_fitness() {
        let targets = EffectivenessModel::default().targets();
        let fit = ReferenceFit::new(targets);
        let output = CandidateEffectiveness {
            chilled_water: targets.chilled_water,
            cooling_coil: targets.cooling_coil,
        };

        let score = fit.objective(&ReferencePair::new(0.5, 100.0), &output).unwrap();
        assert_eq!(score, MAX_FITNESS);
    }

    #[test]
    fn objective_is_inverse_mean_error() {
        let fit = ReferenceFit::new(TargetEffectiveness {
            chilled_water: 0.9,
            cooling_coil: 0.8,
        });
        let output = CandidateEffectiveness {
            chilled_water: 0.8,
            cooling_coil: 0.7,
        };

        let score = fit.objective(&ReferencePair::new(0.5, 100.0), &output).unwrap();
        assert_relative_eq!(score, 10.0, max_relative = 1e-9);
    }

    #[test]
    fn bounds_cover_the_search_domain() {
        let [efficacy, capacity] = ReferenceFit::bounds();

        assert_relative_eq!(efficacy.lower(), 0.01);
        assert_relative_eq!(efficacy.upper(), 0.99);
        assert_relative_eq!(capacity.lower(), 10.0);
        assert_relative_eq!(capacity.upper(), 10_000.0);
        assert!(!efficacy.contains(1.0));
    }
}
