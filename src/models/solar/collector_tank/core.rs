//! Transient energy balance of a solar collector heating a storage tank.
//!
//! The tank fluid is a single lumped node. The collector delivers constant
//! power; the wall conducts heat to ambient in proportion to the temperature
//! excess. Heating is resolved in equal temperature increments:
//!
//! ```text
//! validate → geometry → demand, input, loss → integrate → aggregate
//! ```
//!
//! Every stage is a pure function, so identical inputs give identical results.

mod config;
mod energy_demand;
mod energy_input;
mod error;
mod geometry;
mod input;
mod integrate;
mod results;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{EngineConfig, FluidProperties, WallProperties};
pub use energy_demand::{estimate_energy_demand, estimate_loss_rate, tank_heat_capacity};
pub use energy_input::{absorbed_power, estimate_energy_input};
pub use error::{Dimension, EngineError, Parameter};
pub use geometry::Geometry;
pub use input::{MAX_INCREMENTS, PanelShape, SimulationInput, SolarPanel, StorageTank};
pub use results::{SimulationResult, Trajectory, TrajectoryPoint};

use integrate::integrate;
use results::aggregate;

/// Simulates heating the tank from its initial to its target temperature.
///
/// # Errors
///
/// Returns the first [`EngineError`] found while validating `input`, or
/// [`EngineError::UnreachableTarget`] if wall losses match the collector
/// input before the target is reached. No partial result is returned.
pub fn simulate(
    input: &SimulationInput,
    config: &EngineConfig,
) -> Result<SimulationResult, EngineError> {
    let validated = input.validate()?;
    let geometry = geometry::resolve_geometry(&validated.panel, &validated.tank);

    let demand = estimate_energy_demand(
        geometry.tank_volume,
        validated.temperatures.initial(),
        validated.temperatures.target(),
        &config.fluid,
    );
    let integration = integrate(&validated, &geometry, config)?;

    Ok(aggregate(&geometry, demand, integration))
}
