use uom::si::{
    f64::{HeatFluxDensity, Length, Ratio, ThermalConductivity, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    length::meter,
    ratio::percent,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::{PanelShape, SimulationInput, SolarPanel, StorageTank};

/// A 2 m × 3 m panel at 20 % efficiency under 1000 W/m², heating an
/// insulated 1 m × 1 m tank from 20 °C to 40 °C in 10 increments.
pub(crate) fn example_input() -> SimulationInput {
    SimulationInput {
        panel: SolarPanel {
            shape: PanelShape::Rectangle {
                width: Length::new::<meter>(2.0),
                length: Length::new::<meter>(3.0),
            },
            efficiency: Ratio::new::<percent>(20.0),
            solar_flux: HeatFluxDensity::new::<watt_per_square_meter>(1000.0),
        },
        tank: StorageTank {
            height: Length::new::<meter>(1.0),
            diameter: Length::new::<meter>(1.0),
            wall_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.0),
        },
        fluid_init_temp: ThermodynamicTemperature::new::<degree_celsius>(20.0),
        fluid_final_temp: ThermodynamicTemperature::new::<degree_celsius>(40.0),
        number_of_increments: 10,
    }
}
