use std::fmt;

use thiserror::Error;
use twine_solvers::transient::euler;
use uom::si::f64::{Power, ThermodynamicTemperature};

use crate::support::constraint::ConstraintError;

/// Errors that can occur while simulating a collector heating a tank.
///
/// Every variant is returned in place of a result; the engine never
/// publishes a partial [`SimulationResult`](super::SimulationResult).
#[derive(Debug, Error)]
pub enum EngineError {
    /// A panel or tank dimension is not strictly positive.
    #[error("invalid {dimension}: {source}")]
    InvalidGeometry {
        dimension: Dimension,
        #[source]
        source: ConstraintError,
    },

    /// A physical parameter is outside its valid range.
    #[error("invalid {parameter}: {source}")]
    InvalidParameter {
        parameter: Parameter,
        #[source]
        source: ConstraintError,
    },

    /// The target temperature does not exceed the initial temperature.
    #[error("target temperature {target:?} must exceed initial temperature {initial:?}")]
    InvalidTargetTemperature {
        initial: ThermodynamicTemperature,
        target: ThermodynamicTemperature,
    },

    /// The increment count is zero or above [`MAX_INCREMENTS`](super::MAX_INCREMENTS).
    #[error(
        "number of increments must be between 1 and {max}, got {increments}",
        max = super::MAX_INCREMENTS
    )]
    InvalidStepCount { increments: usize },

    /// Wall losses match or exceed the collector input somewhere along the way.
    ///
    /// The time to cross the increment starting at `temperature` would be
    /// infinite or negative, so the tank never reaches its target.
    #[error("target unreachable: net power {net_power:?} at {temperature:?} (step {step})")]
    UnreachableTarget {
        /// Trajectory point where the balance stalled (0 is the initial state).
        step: usize,

        /// Tank temperature at that point.
        temperature: ThermodynamicTemperature,

        /// Collector input minus wall loss at that point.
        net_power: Power,
    },

    /// The transient solver reported a failure.
    #[error("transient solver failed")]
    Solver(#[from] euler::Error),
}

/// Panel or tank dimension named by [`EngineError::InvalidGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    PanelWidth,
    PanelLength,
    PanelDiameter,
    TankHeight,
    TankDiameter,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PanelWidth => "panel width",
            Self::PanelLength => "panel length",
            Self::PanelDiameter => "panel diameter",
            Self::TankHeight => "tank height",
            Self::TankDiameter => "tank diameter",
        })
    }
}

/// Physical parameter named by [`EngineError::InvalidParameter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    PanelEfficiency,
    SolarFlux,
    WallConductivity,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PanelEfficiency => "panel efficiency",
            Self::SolarFlux => "solar flux",
            Self::WallConductivity => "wall thermal conductivity",
        })
    }
}
