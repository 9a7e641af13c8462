//! Heat balance model and temperature-stepped ODE problem for the tank.
//!
//! The independent variable is tank temperature, not time. Each step rises
//! by a fixed temperature increment, and elapsed time is the integrated state:
//!
//! ```text
//! dt/dT = C / (P_in − P_loss(T))
//! ```

use std::convert::Infallible;

use twine_core::{DerivativeOf, Model, OdeProblem, StepIntegrable};
use uom::{
    ConstZero,
    si::f64::{
        Area, Energy, HeatCapacity, Length, Power, TemperatureInterval, ThermalConductivity,
        ThermodynamicTemperature, Time,
    },
};

use crate::support::units::HeatingPace;

use super::super::{energy_demand::estimate_loss_rate, input::TemperatureSpan};

/// Tank state at one point of the temperature partition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(in super::super) struct TankState {
    /// Partition index, 0 for the initial state.
    pub(in super::super) step: usize,
    pub(in super::super) temperature: ThermodynamicTemperature,
    pub(in super::super) progress: Progress,
}

impl TankState {
    pub(in super::super) fn initial(temperature: ThermodynamicTemperature) -> Self {
        Self {
            step: 0,
            temperature,
            progress: Progress::START,
        }
    }
}

/// Quantities accumulated since heating began.
///
/// Collector energy is not integrated here; it follows from each step's
/// duration once the step is solved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(in super::super) struct Progress {
    pub(in super::super) elapsed: Time,
    pub(in super::super) conduction_loss: Energy,
}

impl Progress {
    pub(in super::super) const START: Self = Self {
        elapsed: Time::ZERO,
        conduction_loss: Energy::ZERO,
    };
}

/// Rate of change of [`Progress`] per kelvin of temperature rise.
#[derive(Debug, Clone, Copy)]
pub(in super::super) struct ProgressRate {
    pace: HeatingPace,
    loss: HeatCapacity,
}

impl StepIntegrable<TemperatureInterval> for Progress {
    type Derivative = ProgressRate;

    fn step(&self, rate: ProgressRate, delta: TemperatureInterval) -> Self {
        Self {
            elapsed: self.elapsed + rate.pace * delta,
            conduction_loss: self.conduction_loss + rate.loss * delta,
        }
    }
}

/// Heat flows into and out of the tank at a given state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(in super::super) struct HeatBalance {
    pub(in super::super) absorbed: Power,
    pub(in super::super) loss: Power,
}

impl HeatBalance {
    /// Power left to raise the fluid temperature.
    pub(in super::super) fn net(&self) -> Power {
        self.absorbed - self.loss
    }
}

/// Evaluates the [`HeatBalance`] of the tank at its current temperature.
#[derive(Debug, Clone, Copy)]
pub(in super::super) struct TankHeatBalance {
    pub(in super::super) absorbed: Power,
    pub(in super::super) wall_area: Area,
    pub(in super::super) wall_conductivity: ThermalConductivity,
    pub(in super::super) wall_thickness: Length,
    pub(in super::super) ambient: ThermodynamicTemperature,
}

impl Model for TankHeatBalance {
    type Input = TankState;
    type Output = HeatBalance;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(HeatBalance {
            absorbed: self.absorbed,
            loss: estimate_loss_rate(
                self.wall_area,
                self.wall_conductivity,
                self.wall_thickness,
                input.temperature,
                self.ambient,
            ),
        })
    }
}

/// Partitions the heating range into equal temperature increments.
///
/// The derivative is only evaluated at states with positive net power; the
/// integrator stops before stepping from any other state.
#[derive(Debug, Clone, Copy)]
pub(in super::super) struct TankHeating {
    capacity: HeatCapacity,
    span: TemperatureSpan,
    increments: usize,
}

impl TankHeating {
    pub(in super::super) fn new(
        capacity: HeatCapacity,
        span: TemperatureSpan,
        increments: usize,
    ) -> Self {
        Self {
            capacity,
            span,
            increments,
        }
    }

    /// Temperature rise of a single step.
    pub(in super::super) fn increment(&self) -> TemperatureInterval {
        self.span.rise() / self.increments as f64
    }

    /// Temperature at partition index `step`.
    ///
    /// The last index lands on the target exactly rather than on the sum of
    /// rounded increments.
    fn temperature_at(&self, step: usize) -> ThermodynamicTemperature {
        if step >= self.increments {
            return self.span.target();
        }
        let fraction = step as f64 / self.increments as f64;
        self.span.initial() + self.span.rise() * fraction
    }
}

impl OdeProblem for TankHeating {
    type Input = TankState;
    type Output = HeatBalance;
    type Delta = TemperatureInterval;
    type State = Progress;
    type Error = Infallible;

    fn state(&self, input: &Self::Input) -> Result<Self::State, Self::Error> {
        Ok(input.progress)
    }

    fn derivative(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<DerivativeOf<Self::State, Self::Delta>, Self::Error> {
        let pace: HeatingPace = self.capacity / output.net();
        Ok(ProgressRate {
            pace,
            loss: output.loss * pace,
        })
    }

    fn build_input(
        &self,
        base: &Self::Input,
        state: &Self::State,
        _delta: &Self::Delta,
    ) -> Result<Self::Input, Self::Error> {
        let step = base.step + 1;
        Ok(TankState {
            step,
            temperature: self.temperature_at(step),
            progress: *state,
        })
    }
}
