//! Flat-plate solar collector charging an upright storage tank.
//!
//! [`CollectorTank`] is the [`twine_core::Model`] for this system. Each call
//! simulates heating the tank fluid from its initial to its target
//! temperature and returns the time it takes with the energy totals.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_solar::models::solar::collector_tank::{
//!     CollectorTank, PanelShape, SimulationInput, SolarPanel, StorageTank,
//! };
//! use uom::si::{
//!     f64::{HeatFluxDensity, Length, Ratio, ThermalConductivity, ThermodynamicTemperature},
//!     heat_flux_density::watt_per_square_meter,
//!     length::meter,
//!     ratio::percent,
//!     thermal_conductivity::watt_per_meter_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//!     time::hour,
//! };
//!
//! let input = SimulationInput {
//!     panel: SolarPanel {
//!         shape: PanelShape::Rectangle {
//!             width: Length::new::<meter>(2.0),
//!             length: Length::new::<meter>(3.0),
//!         },
//!         efficiency: Ratio::new::<percent>(20.0),
//!         solar_flux: HeatFluxDensity::new::<watt_per_square_meter>(1000.0),
//!     },
//!     tank: StorageTank {
//!         height: Length::new::<meter>(1.0),
//!         diameter: Length::new::<meter>(1.0),
//!         wall_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.0),
//!     },
//!     fluid_init_temp: ThermodynamicTemperature::new::<degree_celsius>(20.0),
//!     fluid_final_temp: ThermodynamicTemperature::new::<degree_celsius>(40.0),
//!     number_of_increments: 10,
//! };
//!
//! let result = CollectorTank::default().call(&input)?;
//! assert_eq!(result.trajectory.len(), 10);
//! assert!(result.required_time.get::<hour>() > 15.0);
//! # Ok::<(), twine_solar::models::solar::collector_tank::EngineError>(())
//! ```

pub(crate) mod core;

pub use self::core::{
    Dimension, EngineConfig, EngineError, FluidProperties, Geometry, MAX_INCREMENTS, PanelShape,
    Parameter, SimulationInput, SimulationResult, SolarPanel, StorageTank, Trajectory,
    TrajectoryPoint, WallProperties, absorbed_power, estimate_energy_demand,
    estimate_energy_input, estimate_loss_rate, tank_heat_capacity,
};

use twine_core::Model;

/// Solar collector and storage tank heating model.
///
/// Holds only fixed physical configuration; every call is independent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollectorTank {
    pub config: EngineConfig,
}

impl CollectorTank {
    /// Creates a model with the given fluid and wall configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }
}

impl Model for CollectorTank {
    type Input = SimulationInput;
    type Output = SimulationResult;
    type Error = EngineError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::simulate(input, &self.config)
    }
}
