//! Effectiveness targets and the reference-point correlation.

use uom::si::{f64::ThermalConductance, thermal_conductance::watt_per_kelvin};

use crate::DomainError;

/// Exponent applied to capacity ratios when scaling from the reference point.
const CAPACITY_EXPONENT: f64 = 0.8;

/// A trial reference point: the efficacy and cold-stream capacity rate at
/// which the correlation is anchored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePair {
    /// Heat-exchanger effectiveness at the reference point.
    pub efficacy: f64,

    /// Cold-stream capacity rate at the reference point.
    pub capacity: ThermalConductance,
}

impl ReferencePair {
    /// Creates a pair from an efficacy and a capacity rate in W/K.
    pub fn new(efficacy: f64, capacity_w_per_k: f64) -> Self {
        Self {
            efficacy,
            capacity: ThermalConductance::new::<watt_per_kelvin>(capacity_w_per_k),
        }
    }
}

/// Effectiveness values the fitted correlation must reproduce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetEffectiveness {
    /// Effectiveness needed at full chiller duty.
    pub chilled_water: f64,

    /// Effectiveness needed at the IT load.
    pub cooling_coil: f64,
}

impl TargetEffectiveness {
    /// Mean absolute deviation between these targets and a candidate.
    pub fn error(&self, candidate: &CandidateEffectiveness) -> f64 {
        let chilled_water = (self.chilled_water - candidate.chilled_water).abs();
        let cooling_coil = (self.cooling_coil - candidate.cooling_coil).abs();
        0.5 * (chilled_water + cooling_coil)
    }
}

/// Effectiveness predicted by the correlation for a trial reference pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateEffectiveness {
    /// Prediction at the chilled-water capacity.
    pub chilled_water: f64,

    /// Prediction at the cooling-coil capacity.
    pub cooling_coil: f64,
}

/// Capacity rates of one operating point, in W/K.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StreamCapacities {
    pub(crate) cold: f64,
    pub(crate) hot: f64,
}

impl StreamCapacities {
    fn ratio(self) -> f64 {
        self.cold.min(self.hot) / self.cold.max(self.hot)
    }

    fn min(self) -> f64 {
        self.cold.min(self.hot)
    }
}

/// Scales the effectiveness from a reference point to an operating point.
///
/// The reference efficacy is converted into a transfer-unit factor at the
/// reference capacities, which is then rescaled by the capacity exponent to
/// the operating capacities.
///
/// # Errors
///
/// Returns a [`DomainError`] for any input where the correlation is
/// undefined. The result is always finite when `Ok`.
#[allow(clippy::float_cmp)]
pub(crate) fn scale_effectiveness(
    operating: StreamCapacities,
    reference: StreamCapacities,
    efficacy: f64,
) -> Result<f64, DomainError> {
    check_capacity("operating cold stream", operating.cold)?;
    check_capacity("operating hot stream", operating.hot)?;
    check_capacity("reference cold stream", reference.cold)?;
    check_capacity("reference hot stream", reference.hot)?;

    if !efficacy.is_finite() {
        return Err(DomainError::NonFiniteEfficacy { efficacy });
    }
    if efficacy == 1.0 {
        return Err(DomainError::UnitEfficacy);
    }

    let ratio = operating.ratio();
    let reference_ratio = reference.ratio();
    if reference_ratio == 1.0 {
        return Err(DomainError::BalancedReference {
            value: reference.cold,
        });
    }

    let a = (operating.cold / reference.cold).powf(CAPACITY_EXPONENT);
    let b = (operating.hot / reference.hot).powf(CAPACITY_EXPONENT);
    let exponent = 2.0 * a * b * reference.min() * (1.0 - ratio)
        / ((a + b) * operating.min() * (1.0 - reference_ratio));

    let base = (1.0 - efficacy * reference_ratio) / (1.0 - efficacy);
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(DomainError::NegativeBase { base, exponent });
    }

    let value = 1.0 - (1.0 - ratio) / (base.powf(exponent) - ratio);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite { value })
    }
}

fn check_capacity(name: &'static str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DomainError::InvalidCapacity { name, value })
    }
}
