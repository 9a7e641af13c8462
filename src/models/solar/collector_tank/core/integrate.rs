//! Transient heating of the tank in equal temperature increments.
//!
//! Each increment takes `C·ΔT / (P_in − P_loss)` seconds, where `C` is the
//! fluid heat capacity. Stepping in temperature rather than time lands the
//! last point on the target exactly, with no root finding.

mod problem;

use twine_solvers::transient::euler;
use uom::{
    ConstZero,
    si::f64::{Energy, Power},
};

use self::problem::{HeatBalance, TankHeatBalance, TankHeating, TankState};

use super::{
    EngineConfig, EngineError, Geometry,
    energy_demand::tank_heat_capacity,
    energy_input::{absorbed_power, estimate_energy_input},
    input::Validated,
    results::{Trajectory, TrajectoryPoint},
};

/// Trajectory of a completed heating run.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Integration {
    pub(super) trajectory: Trajectory,

    /// Cumulative state at the target temperature.
    pub(super) end: TrajectoryPoint,
}

/// Integrates the tank heat balance from the initial to the target temperature.
///
/// # Errors
///
/// Returns [`EngineError::UnreachableTarget`] if net power is not positive at
/// any point of the partition, target included.
pub(super) fn integrate(
    validated: &Validated,
    geometry: &Geometry,
    config: &EngineConfig,
) -> Result<Integration, EngineError> {
    let span = validated.temperatures;
    let increments = validated.increments.get();

    let model = TankHeatBalance {
        absorbed: absorbed_power(
            geometry.panel_area,
            validated.solar_flux,
            validated.efficiency,
        ),
        wall_area: geometry.tank_wall_area,
        wall_conductivity: validated.wall_conductivity,
        wall_thickness: config.wall.thickness(),
        ambient: config.wall.ambient_temperature(),
    };
    let problem = TankHeating::new(
        tank_heat_capacity(geometry.tank_volume, &config.fluid),
        span,
        increments,
    );

    let initial = TankState::initial(span.initial());
    let mut stall = None;

    let solution = euler::solve(
        &model,
        &problem,
        initial,
        problem.increment(),
        increments,
        |event: &euler::Event<TankState, HeatBalance>| {
            let net_power = event.snapshot.output.net();
            if net_power > Power::ZERO {
                return None;
            }
            stall = Some(EngineError::UnreachableTarget {
                step: event.step,
                temperature: event.snapshot.input.temperature,
                net_power,
            });
            Some(euler::Action::StopEarly)
        },
    )?;

    if let Some(err) = stall {
        return Err(err);
    }

    // Collector energy for each step follows from its solved duration.
    let mut end = TrajectoryPoint {
        elapsed: initial.progress.elapsed,
        temperature: initial.temperature,
        energy_input: Energy::ZERO,
        conduction_loss: initial.progress.conduction_loss,
    };
    let mut points = Vec::with_capacity(increments);

    for snapshot in solution.history.iter().skip(1) {
        let state = snapshot.input;
        let step_duration = state.progress.elapsed - end.elapsed;
        let step_input = estimate_energy_input(
            geometry.panel_area,
            validated.solar_flux,
            validated.efficiency,
            step_duration,
        );

        end = TrajectoryPoint {
            elapsed: state.progress.elapsed,
            temperature: state.temperature,
            energy_input: end.energy_input + step_input,
            conduction_loss: state.progress.conduction_loss,
        };
        points.push(end);
    }

    Ok(Integration {
        trajectory: Trajectory::new(points),
        end,
    })
}
