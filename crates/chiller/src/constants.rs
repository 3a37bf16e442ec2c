use uom::si::{
    f64::{
        Power, SpecificHeatCapacity, TemperatureInterval, ThermalConductance,
        ThermodynamicTemperature,
    },
    power::{kilowatt, watt},
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductance::watt_per_kelvin,
    thermodynamic_temperature::degree_celsius,
};

/// Fixed physical inputs of the chiller scenario.
///
/// The values never change during a fit. Use [`Default`] for the reference
/// data-center scenario, or build a custom set to study another plant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Heat released by the IT equipment, which the cooling coil must remove.
    pub it_load: Power,

    /// Nominal cooling capacity of the chiller.
    pub chiller_capacity: Power,

    /// Heat capacity rate of the hot (air) stream at the reference point.
    pub reference_hot_stream_capacity: ThermalConductance,

    /// Temperature difference across the chiller on the water side.
    pub chiller_delta_t: TemperatureInterval,

    /// Specific heat of the chilled water.
    pub water_specific_heat: SpecificHeatCapacity,

    /// Specific heat of the air stream.
    pub air_specific_heat: SpecificHeatCapacity,

    /// Temperature of the air supplied to the IT equipment.
    pub supply_air_temperature: ThermodynamicTemperature,

    /// Temperature of the cold storage tank.
    pub storage_temperature: ThermodynamicTemperature,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            it_load: Power::new::<kilowatt>(30.0),
            chiller_capacity: Power::new::<kilowatt>(75.0),
            reference_hot_stream_capacity: ThermalConductance::new::<watt_per_kelvin>(4000.0),
            chiller_delta_t: TemperatureInterval::new::<delta_kelvin>(2.0),
            water_specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4217.0),
            air_specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.0),
            supply_air_temperature: ThermodynamicTemperature::new::<degree_celsius>(16.0),
            storage_temperature: ThermodynamicTemperature::new::<degree_celsius>(15.0),
        }
    }
}

impl PhysicalConstants {
    /// Temperature difference between the supplied air and the storage tank.
    ///
    /// Positive when the supply air is warmer than the tank.
    pub fn approach(&self) -> TemperatureInterval {
        let supply = self.supply_air_temperature.get::<degree_celsius>();
        let storage = self.storage_temperature.get::<degree_celsius>();
        TemperatureInterval::new::<delta_kelvin>(supply - storage)
    }

    /// Temperature of the air returning from the IT equipment.
    ///
    /// The supply air picks up the full IT load at the reference hot-stream
    /// capacity.
    pub fn return_air_temperature(&self) -> ThermodynamicTemperature {
        let rise = self.it_load.get::<watt>()
            / self.reference_hot_stream_capacity.get::<watt_per_kelvin>();
        ThermodynamicTemperature::new::<degree_celsius>(
            self.supply_air_temperature.get::<degree_celsius>() + rise,
        )
    }
}
