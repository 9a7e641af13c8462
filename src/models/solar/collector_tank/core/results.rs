use std::slice;

use uom::si::{
    f64::{Area, Energy, Power, ThermodynamicTemperature, Time, Volume},
    thermodynamic_temperature::degree_celsius,
    time::hour,
};

use super::{Geometry, integrate::Integration};

/// Outcome of heating the tank from its initial to its target temperature.
///
/// Produced only when every stage succeeds, so `calculation_complete` is
/// always `true` on a value you hold. Callers that need the not-yet-run case
/// keep an `Option<SimulationResult>`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub panel_surface_area: Area,
    pub storage_tank_capacity: Volume,

    /// Energy delivered by the collector over the full heating time.
    pub solar_panel_energy_input: Energy,

    /// Sensible heat needed to raise the fluid to the target temperature.
    pub energy_required_to_heat_tank_fluid: Energy,

    /// Energy conducted out through the tank wall while heating.
    ///
    /// Collector input minus this loss equals the required energy.
    pub conduction_loss: Energy,

    pub required_time: Time,
    pub calculation_complete: bool,

    /// Cumulative state after each temperature increment.
    pub trajectory: Trajectory,
}

impl SimulationResult {
    /// Mean power stored in the fluid over the heating time.
    #[must_use]
    pub fn average_net_power(&self) -> Power {
        self.energy_required_to_heat_tank_fluid / self.required_time
    }
}

/// Tank state at the end of one temperature increment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    /// Time since heating began.
    pub elapsed: Time,
    pub temperature: ThermodynamicTemperature,

    /// Cumulative collector energy.
    pub energy_input: Energy,

    /// Cumulative wall loss.
    pub conduction_loss: Energy,
}

/// Ordered heating trajectory, one point per temperature increment.
///
/// The initial state is not included; the last point sits on the target.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub(super) fn new(points: Vec<TrajectoryPoint>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at the target temperature.
    #[must_use]
    pub fn last(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }

    pub fn iter(&self) -> slice::Iter<'_, TrajectoryPoint> {
        self.points.iter()
    }

    /// `(elapsed hours, temperature °C)` pairs for charting.
    #[must_use]
    pub fn series_hours_celsius(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|point| {
                (
                    point.elapsed.get::<hour>(),
                    point.temperature.get::<degree_celsius>(),
                )
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectoryPoint;
    type IntoIter = slice::Iter<'a, TrajectoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Assembles the published result from the resolved stages.
///
/// Totals are read from the state at the target temperature.
pub(super) fn aggregate(
    geometry: &Geometry,
    energy_demand: Energy,
    integration: Integration,
) -> SimulationResult {
    let Integration { trajectory, end } = integration;

    SimulationResult {
        panel_surface_area: geometry.panel_area,
        storage_tank_capacity: geometry.tank_volume,
        solar_panel_energy_input: end.energy_input,
        energy_required_to_heat_tank_fluid: energy_demand,
        conduction_loss: end.conduction_loss,
        required_time: end.elapsed,
        calculation_complete: true,
        trajectory,
    }
}
