use uom::si::{
    f64::{MassRate, ThermalConductance},
    mass_rate::kilogram_per_second,
    power::watt,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductance::watt_per_kelvin,
};

use crate::PhysicalConstants;

/// Heat capacity rates derived from the [`PhysicalConstants`].
///
/// The cooling-coil capacity is the chilled-water capacity scaled by the
/// ratio of IT load to chiller capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedCapacities {
    /// Capacity rate of the hot (air) stream.
    pub hot_stream: ThermalConductance,

    /// Capacity rate of the chilled-water loop at full chiller duty.
    pub chilled_water: ThermalConductance,

    /// Capacity rate seen by the cooling coil at the IT load.
    pub cooling_coil: ThermalConductance,
}

impl DerivedCapacities {
    /// Derives the capacity rates of the scenario.
    pub fn from_constants(constants: &PhysicalConstants) -> Self {
        let it_load = constants.it_load.get::<watt>();
        let chiller_capacity = constants.chiller_capacity.get::<watt>();
        let chilled_water = it_load / constants.chiller_delta_t.get::<delta_kelvin>();
        let cooling_coil = chilled_water * (it_load / chiller_capacity);

        Self {
            hot_stream: constants.reference_hot_stream_capacity,
            chilled_water: ThermalConductance::new::<watt_per_kelvin>(chilled_water),
            cooling_coil: ThermalConductance::new::<watt_per_kelvin>(cooling_coil),
        }
    }

    /// Mass flow of air implied by the hot-stream capacity.
    pub fn air_mass_rate(&self, constants: &PhysicalConstants) -> MassRate {
        mass_rate(
            self.hot_stream,
            constants.air_specific_heat.get::<joule_per_kilogram_kelvin>(),
        )
    }

    /// Mass flow of water implied by the chilled-water capacity.
    pub fn chilled_water_mass_rate(&self, constants: &PhysicalConstants) -> MassRate {
        mass_rate(
            self.chilled_water,
            constants.water_specific_heat.get::<joule_per_kilogram_kelvin>(),
        )
    }
}

fn mass_rate(capacity: ThermalConductance, specific_heat: f64) -> MassRate {
    MassRate::new::<kilogram_per_second>(capacity.get::<watt_per_kelvin>() / specific_heat)
}
