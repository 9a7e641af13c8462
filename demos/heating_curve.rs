//! Heats a storage tank with a flat-plate collector and prints the curve.
//!
//! Run with `cargo run --example heating_curve`. Set `RUST_LOG=debug` to see
//! the session lifecycle.

use std::error::Error;

use twine_solar::{
    models::solar::collector_tank::{
        CollectorTank, PanelShape, SimulationInput, SolarPanel, StorageTank,
    },
    session::Session,
};
use uom::si::{
    area::square_meter,
    energy::kilowatt_hour,
    f64::{HeatFluxDensity, Length, Ratio, ThermalConductivity, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    length::meter,
    power::watt,
    ratio::percent,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
    time::hour,
    volume::liter,
};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let input = SimulationInput {
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
            wall_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.04),
        },
        fluid_init_temp: ThermodynamicTemperature::new::<degree_celsius>(20.0),
        fluid_final_temp: ThermodynamicTemperature::new::<degree_celsius>(60.0),
        number_of_increments: 20,
    };

    let session = Session::new(CollectorTank::default())?;
    let done = session.run(input).wait()?;
    let result = done.into_outcome()?;

    println!(
        "panel area:       {:>10.3} m²",
        result.panel_surface_area.get::<square_meter>()
    );
    println!(
        "tank capacity:    {:>10.1} L",
        result.storage_tank_capacity.get::<liter>()
    );
    println!(
        "energy required:  {:>10.3} kWh",
        result.energy_required_to_heat_tank_fluid.get::<kilowatt_hour>()
    );
    println!(
        "collector input:  {:>10.3} kWh",
        result.solar_panel_energy_input.get::<kilowatt_hour>()
    );
    println!(
        "wall loss:        {:>10.3} kWh",
        result.conduction_loss.get::<kilowatt_hour>()
    );
    println!(
        "average net:      {:>10.1} W",
        result.average_net_power().get::<watt>()
    );
    println!(
        "required time:    {:>10.2} h",
        result.required_time.get::<hour>()
    );

    println!();
    println!("{:>8}  {:>8}", "hours", "°C");
    for (hours, celsius) in result.trajectory.series_hours_celsius() {
        println!("{hours:>8.2}  {celsius:>8.2}");
    }

    Ok(())
}
