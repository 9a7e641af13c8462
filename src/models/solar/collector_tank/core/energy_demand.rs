//! Heat the tank fluid needs, and heat it loses through the wall.

use uom::{
    ConstZero,
    si::f64::{
        Area, Energy, HeatCapacity, Length, Power, TemperatureInterval, ThermalConductivity,
        ThermodynamicTemperature, Volume,
    },
};

use crate::support::units::TemperatureDifference;

use super::FluidProperties;

/// Returns the heat capacity of a full tank, `ρ · V · c`.
#[must_use]
pub fn tank_heat_capacity(tank_volume: Volume, fluid: &FluidProperties) -> HeatCapacity {
    fluid.density() * tank_volume * fluid.specific_heat()
}

/// Returns the sensible heat needed to raise the tank fluid from `initial` to `target`.
#[must_use]
pub fn estimate_energy_demand(
    tank_volume: Volume,
    initial: ThermodynamicTemperature,
    target: ThermodynamicTemperature,
    fluid: &FluidProperties,
) -> Energy {
    tank_heat_capacity(tank_volume, fluid) * target.minus(initial)
}

/// Returns the conduction loss through the tank wall, `k · A · (T − T∞) / L`.
///
/// Only losses are modeled: a tank at or below ambient loses nothing and
/// gains nothing. A wall with zero conductivity never loses heat.
#[must_use]
pub fn estimate_loss_rate(
    wall_area: Area,
    conductivity: ThermalConductivity,
    wall_thickness: Length,
    inside: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
) -> Power {
    let excess = inside.minus(ambient);
    if excess <= TemperatureInterval::ZERO {
        return Power::ZERO;
    }
    conductivity * wall_area * excess / wall_thickness
}
