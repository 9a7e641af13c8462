//! Collector heat delivered to the tank.

use uom::si::{
    f64::{Area, Energy, HeatFluxDensity, Power, Ratio, Time},
    ratio::ratio,
};

/// Returns the thermal power the collector delivers to the tank.
///
/// `P = q″ · A · η`. The collector model has no temperature dependence, so
/// the result is the same at every tank state.
#[must_use]
pub fn absorbed_power(panel_area: Area, solar_flux: HeatFluxDensity, efficiency: Ratio) -> Power {
    solar_flux * panel_area * efficiency.get::<ratio>()
}

/// Returns the energy the collector delivers over `duration`.
#[must_use]
pub fn estimate_energy_input(
    panel_area: Area,
    solar_flux: HeatFluxDensity,
    efficiency: Ratio,
    duration: Time,
) -> Energy {
    absorbed_power(panel_area, solar_flux, efficiency) * duration
}
