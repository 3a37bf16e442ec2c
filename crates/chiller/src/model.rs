use refit_core::Model;
use uom::si::{
    f64::ThermalConductance, power::watt, temperature_interval::kelvin as delta_kelvin,
    thermal_conductance::watt_per_kelvin,
};

use crate::{
    CandidateEffectiveness, DerivedCapacities, DomainError, PhysicalConstants, ReferencePair,
    TargetEffectiveness,
    effectiveness::{StreamCapacities, scale_effectiveness},
};

/// The chiller effectiveness model.
///
/// Holds the fixed scenario and its derived capacities. Evaluating the model
/// with a [`ReferencePair`] predicts the effectiveness at both the
/// chilled-water and cooling-coil capacities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectivenessModel {
    constants: PhysicalConstants,
    capacities: DerivedCapacities,
}

impl EffectivenessModel {
    /// Creates a model for the given scenario.
    pub fn new(constants: PhysicalConstants) -> Self {
        Self {
            capacities: DerivedCapacities::from_constants(&constants),
            constants,
        }
    }

    /// Returns the scenario constants.
    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Returns the derived capacity rates.
    pub fn capacities(&self) -> &DerivedCapacities {
        &self.capacities
    }

    /// Effectiveness the chiller heat exchanger needs at full chiller duty.
    pub fn target_effectiveness_1(&self) -> f64 {
        self.target(
            self.constants.chiller_capacity.get::<watt>(),
            self.capacities.chilled_water,
        )
    }

    /// Effectiveness the heat exchanger needs to carry the IT load at the
    /// cooling-coil capacity.
    pub fn target_effectiveness_2(&self) -> f64 {
        self.target(
            self.constants.it_load.get::<watt>(),
            self.capacities.cooling_coil,
        )
    }

    /// Both targets together.
    pub fn targets(&self) -> TargetEffectiveness {
        TargetEffectiveness {
            chilled_water: self.target_effectiveness_1(),
            cooling_coil: self.target_effectiveness_2(),
        }
    }

    /// Predicts the effectiveness at `candidate_capacity` for a trial
    /// reference pair.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the correlation is undefined for the
    /// inputs. A successful result is always finite.
    pub fn candidate_effectiveness(
        &self,
        candidate_capacity: ThermalConductance,
        trial: &ReferencePair,
    ) -> Result<f64, DomainError> {
        let operating = StreamCapacities {
            cold: candidate_capacity.get::<watt_per_kelvin>(),
            hot: self.capacities.hot_stream.get::<watt_per_kelvin>(),
        };
        let reference = StreamCapacities {
            cold: trial.capacity.get::<watt_per_kelvin>(),
            hot: self
                .constants
                .reference_hot_stream_capacity
                .get::<watt_per_kelvin>(),
        };
        scale_effectiveness(operating, reference, trial.efficacy)
    }

    /// Heat duty over the largest transfer possible between the supply air
    /// and the storage tank.
    fn target(&self, heat: f64, cold_capacity: ThermalConductance) -> f64 {
        let hot = self.capacities.hot_stream.get::<watt_per_kelvin>();
        let min_capacity = cold_capacity.get::<watt_per_kelvin>().min(hot);
        let approach = self.constants.approach().get::<delta_kelvin>();
        heat / (min_capacity * (approach + heat / hot))
    }
}

impl Default for EffectivenessModel {
    fn default() -> Self {
        Self::new(PhysicalConstants::default())
    }
}

impl Model for EffectivenessModel {
    type Input = ReferencePair;
    type Output = CandidateEffectiveness;
    type Error = DomainError;

    fn call(&self, trial: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(CandidateEffectiveness {
            chilled_water: self.candidate_effectiveness(self.capacities.chilled_water, trial)?,
            cooling_coil: self.candidate_effectiveness(self.capacities.cooling_coil, trial)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_targets() {
        let model = EffectivenessModel::default();

        // 75 kW / (4000 W/K * (1 K + 18.75 K)) and 30 kW / (4000 W/K * 8.5 K).
        assert_relative_eq!(model.target_effectiveness_1(), 75.0 / 79.0, epsilon = 1e-9);
        assert_relative_eq!(model.target_effectiveness_2(), 30.0 / 34.0, epsilon = 1e-9);
    }

    #[test]
    fn targets_are_deterministic() {
        let model = EffectivenessModel::default();
        let first = model.targets();
        let second = model.targets();

        assert_eq!(first.chilled_water.to_bits(), second.chilled_water.to_bits());
        assert_eq!(first.cooling_coil.to_bits(), second.cooling_coil.to_bits());
        assert_eq!(first.chilled_water, model.target_effectiveness_1());
        assert_eq!(first.cooling_coil, model.target_effectiveness_2());
    }

    #[test]
    fn evaluates_both_capacities() {
        let model = EffectivenessModel::default();
        let output = model.call(&ReferencePair::new(0.99, 1505.0)).unwrap();

        assert_relative_eq!(output.chilled_water, 0.968_525_763_771_209, epsilon = 1e-9);
        assert_relative_eq!(output.cooling_coil, 0.882_068_270_853_223_8, epsilon = 1e-9);
    }

    #[test]
    fn small_reference_capacity() {
        let model = EffectivenessModel::default();
        let output = model.call(&ReferencePair::new(0.5, 100.0)).unwrap();

        assert_relative_eq!(output.chilled_water, 0.033_548_341_129_005_95, epsilon = 1e-9);
        assert_relative_eq!(output.cooling_coil, 0.032_712_666_538_495_58, epsilon = 1e-9);
    }

    #[test]
    fn candidate_uses_the_given_capacity() {
        let model = EffectivenessModel::default();
        let trial = ReferencePair::new(0.75, 15_000.0);

        let chilled_water = model
            .candidate_effectiveness(model.capacities().chilled_water, &trial)
            .unwrap();
        assert_relative_eq!(chilled_water, 0.75, epsilon = 1e-12);

        let output = model.call(&trial).unwrap();
        assert_relative_eq!(output.chilled_water, chilled_water);
        assert_relative_eq!(output.cooling_coil, 0.551_204_447_954_666_9, epsilon = 1e-9);
    }

    #[test]
    fn domain_errors_propagate() {
        let model = EffectivenessModel::default();

        assert_eq!(
            model.call(&ReferencePair::new(1.0, 500.0)),
            Err(DomainError::UnitEfficacy)
        );
        assert_eq!(
            model.call(&ReferencePair::new(0.5, 4000.0)),
            Err(DomainError::BalancedReference { value: 4000.0 })
        );
        assert!(matches!(
            model.call(&ReferencePair::new(0.5, 0.0)),
            Err(DomainError::InvalidCapacity { .. })
        ));
    }
}
