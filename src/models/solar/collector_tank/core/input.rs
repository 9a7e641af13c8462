//! Simulation input and its validated form.

use std::{cmp::Ordering, num::NonZeroUsize};

use uom::si::f64::{
    HeatFluxDensity, Length, Ratio, TemperatureInterval, ThermalConductivity,
    ThermodynamicTemperature,
};

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive, UnitInterval},
    units::TemperatureDifference,
};

use super::{Dimension, EngineError, Geometry, Parameter, geometry::resolve_geometry};

type Positive<T> = Constrained<T, StrictlyPositive>;

/// Largest accepted [`SimulationInput::number_of_increments`].
pub const MAX_INCREMENTS: usize = 1_000_000;

/// Outline of the solar collector.
///
/// Only the dimensions of the selected shape exist, so a rectangle can never
/// carry a stray diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelShape {
    Rectangle { width: Length, length: Length },
    Circle { diameter: Length },
}

/// Solar collector exposed to a constant flux.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPanel {
    pub shape: PanelShape,

    /// Fraction of incident flux delivered to the tank as heat.
    ///
    /// Build from percent with `Ratio::new::<percent>(..)`; must lie in 0–100 %.
    pub efficiency: Ratio,

    /// Incident solar power per unit collector area.
    pub solar_flux: HeatFluxDensity,
}

/// Upright cylindrical storage tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StorageTank {
    pub height: Length,
    pub diameter: Length,

    /// Thermal conductivity of the tank wall; zero means ideal insulation.
    pub wall_conductivity: ThermalConductivity,
}

/// Immutable snapshot of everything one simulation run needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationInput {
    pub panel: SolarPanel,
    pub tank: StorageTank,
    pub fluid_init_temp: ThermodynamicTemperature,
    pub fluid_final_temp: ThermodynamicTemperature,

    /// Number of equal temperature increments between the initial and final
    /// temperatures, and the length of the resulting trajectory.
    ///
    /// Must lie in `1..=MAX_INCREMENTS`.
    pub number_of_increments: usize,
}

impl SimulationInput {
    /// Resolves panel and tank geometry without running the simulation.
    ///
    /// Useful for previewing areas and capacity while inputs are edited.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidGeometry`] if any active dimension is not
    /// strictly positive.
    pub fn geometry(&self) -> Result<Geometry, EngineError> {
        let panel = PanelOutline::check(&self.panel.shape)?;
        let tank = TankShape::check(&self.tank)?;
        Ok(resolve_geometry(&panel, &tank))
    }

    /// Re-checks every value the engine depends on.
    ///
    /// Checks run in order: geometry, physical parameters, temperatures,
    /// step count. The first failure is returned.
    pub(super) fn validate(&self) -> Result<Validated, EngineError> {
        let panel = PanelOutline::check(&self.panel.shape)?;
        let tank = TankShape::check(&self.tank)?;

        let efficiency = UnitInterval::new(self.panel.efficiency).map_err(|source| {
            EngineError::InvalidParameter {
                parameter: Parameter::PanelEfficiency,
                source,
            }
        })?;
        let solar_flux = NonNegative::new(self.panel.solar_flux).map_err(|source| {
            EngineError::InvalidParameter {
                parameter: Parameter::SolarFlux,
                source,
            }
        })?;
        let wall_conductivity = NonNegative::new(self.tank.wall_conductivity).map_err(|source| {
            EngineError::InvalidParameter {
                parameter: Parameter::WallConductivity,
                source,
            }
        })?;

        let temperatures = TemperatureSpan::new(self.fluid_init_temp, self.fluid_final_temp)?;

        let increments = NonZeroUsize::new(self.number_of_increments)
            .filter(|n| n.get() <= MAX_INCREMENTS)
            .ok_or(EngineError::InvalidStepCount {
                increments: self.number_of_increments,
            })?;

        Ok(Validated {
            panel,
            tank,
            efficiency: efficiency.into_inner(),
            solar_flux: solar_flux.into_inner(),
            wall_conductivity: wall_conductivity.into_inner(),
            temperatures,
            increments,
        })
    }
}

/// Input that passed [`SimulationInput::validate`].
#[derive(Debug, Clone, Copy)]
pub(super) struct Validated {
    pub(super) panel: PanelOutline,
    pub(super) tank: TankShape,
    pub(super) efficiency: Ratio,
    pub(super) solar_flux: HeatFluxDensity,
    pub(super) wall_conductivity: ThermalConductivity,
    pub(super) temperatures: TemperatureSpan,
    pub(super) increments: NonZeroUsize,
}

/// Panel outline with strictly positive dimensions.
#[derive(Debug, Clone, Copy)]
pub(super) enum PanelOutline {
    Rectangle {
        width: Positive<Length>,
        length: Positive<Length>,
    },
    Circle {
        diameter: Positive<Length>,
    },
}

impl PanelOutline {
    fn check(shape: &PanelShape) -> Result<Self, EngineError> {
        Ok(match *shape {
            PanelShape::Rectangle { width, length } => Self::Rectangle {
                width: positive(width, Dimension::PanelWidth)?,
                length: positive(length, Dimension::PanelLength)?,
            },
            PanelShape::Circle { diameter } => Self::Circle {
                diameter: positive(diameter, Dimension::PanelDiameter)?,
            },
        })
    }
}

/// Tank cylinder with strictly positive dimensions.
#[derive(Debug, Clone, Copy)]
pub(super) struct TankShape {
    pub(super) height: Positive<Length>,
    pub(super) diameter: Positive<Length>,
}

impl TankShape {
    fn check(tank: &StorageTank) -> Result<Self, EngineError> {
        Ok(Self {
            height: positive(tank.height, Dimension::TankHeight)?,
            diameter: positive(tank.diameter, Dimension::TankDiameter)?,
        })
    }
}

fn positive(value: Length, dimension: Dimension) -> Result<Positive<Length>, EngineError> {
    StrictlyPositive::new(value).map_err(|source| EngineError::InvalidGeometry { dimension, source })
}

/// Heating range with `target > initial`.
#[derive(Debug, Clone, Copy)]
pub(super) struct TemperatureSpan {
    initial: ThermodynamicTemperature,
    target: ThermodynamicTemperature,
}

impl TemperatureSpan {
    fn new(
        initial: ThermodynamicTemperature,
        target: ThermodynamicTemperature,
    ) -> Result<Self, EngineError> {
        match target.partial_cmp(&initial) {
            Some(Ordering::Greater) => Ok(Self { initial, target }),
            _ => Err(EngineError::InvalidTargetTemperature { initial, target }),
        }
    }

    pub(super) fn initial(&self) -> ThermodynamicTemperature {
        self.initial
    }

    pub(super) fn target(&self) -> ThermodynamicTemperature {
        self.target
    }

    /// Total temperature rise, strictly positive.
    pub(super) fn rise(&self) -> TemperatureInterval {
        self.target.minus(self.initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        heat_flux_density::watt_per_square_meter, length::meter, ratio::percent,
        thermal_conductivity::watt_per_meter_kelvin, thermodynamic_temperature::degree_celsius,
    };

    use crate::support::constraint::ConstraintError;

    use super::super::test_support::example_input;

    #[test]
    fn example_input_is_valid() {
        let validated = example_input().validate().expect("example input is valid");
        assert_eq!(validated.increments.get(), 10);
        assert!(matches!(validated.panel, PanelOutline::Rectangle { .. }));
    }

    #[test]
    fn zero_panel_width_is_invalid_geometry() {
        let mut input = example_input();
        input.panel.shape = PanelShape::Rectangle {
            width: Length::new::<meter>(0.0),
            length: Length::new::<meter>(3.0),
        };

        assert!(matches!(
            input.validate(),
            Err(EngineError::InvalidGeometry {
                dimension: Dimension::PanelWidth,
                source: ConstraintError::Zero,
            })
        ));
    }

    #[test]
    fn negative_tank_diameter_is_invalid_geometry() {
        let mut input = example_input();
        input.tank.diameter = Length::new::<meter>(-1.0);

        assert!(matches!(
            input.validate(),
            Err(EngineError::InvalidGeometry {
                dimension: Dimension::TankDiameter,
                source: ConstraintError::Negative,
            })
        ));
    }

    #[test]
    fn circle_ignores_rectangle_dimensions() {
        let mut input = example_input();
        input.panel.shape = PanelShape::Circle {
            diameter: Length::new::<meter>(f64::NAN),
        };

        assert!(matches!(
            input.validate(),
            Err(EngineError::InvalidGeometry {
                dimension: Dimension::PanelDiameter,
                source: ConstraintError::NotANumber,
            })
        ));
    }

    #[test]
    fn efficiency_above_hundred_percent_is_rejected() {
        let mut input = example_input();
        input.panel.efficiency = Ratio::new::<percent>(101.0);

        assert!(matches!(
            input.validate(),
            Err(EngineError::InvalidParameter {
                parameter: Parameter::PanelEfficiency,
                source: ConstraintError::AboveMaximum,
            })
        ));
    }

    #[test]
    fn negative_flux_and_conductivity_are_rejected() {
        let mut input = example_input();
        input.panel.solar_flux = HeatFluxDensity::new::<watt_per_square_meter>(-1.0);
        assert!(matches!(
            input.validate(),
            Err(EngineError::InvalidParameter {
                parameter: Parameter::SolarFlux,
                ..
            })
        ));

        let mut input = example_input();
        input.tank.wall_conductivity = ThermalConductivity::new::<watt_per_meter_kelvin>(-0.5);
        assert!(matches!(
            input.validate(),
            Err(EngineError::InvalidParameter {
                parameter: Parameter::WallConductivity,
                ..
            })
        ));
    }

    #[test]
    fn zero_flux_is_accepted() {
        let mut input = example_input();
        input.panel.solar_flux = HeatFluxDensity::new::<watt_per_square_meter>(0.0);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn target_must_exceed_initial_temperature() {
        let mut input = example_input();
        input.fluid_final_temp = input.fluid_init_temp;
        assert!(matches!(
            input.validate(),
            Err(EngineError::InvalidTargetTemperature { .. })
        ));

        input.fluid_final_temp = ThermodynamicTemperature::new::<degree_celsius>(10.0);
        assert!(matches!(
            input.validate(),
            Err(EngineError::InvalidTargetTemperature { .. })
        ));
    }

    #[test]
    fn zero_increments_fail_fast() {
        let mut input = example_input();
        input.number_of_increments = 0;

        assert!(matches!(
            input.validate(),
            Err(EngineError::InvalidStepCount { increments: 0 })
        ));
    }

    #[test]
    fn increments_are_capped() {
        let mut input = example_input();

        input.number_of_increments = MAX_INCREMENTS;
        assert!(input.validate().is_ok());

        for increments in [MAX_INCREMENTS + 1, usize::MAX] {
            input.number_of_increments = increments;
            assert!(matches!(
                input.validate(),
                Err(EngineError::InvalidStepCount { increments: n }) if n == increments
            ));
        }
    }

    #[test]
    fn geometry_is_checked_before_temperatures() {
        let mut input = example_input();
        input.tank.height = Length::new::<meter>(0.0);
        input.number_of_increments = 0;

        assert!(matches!(
            input.validate(),
            Err(EngineError::InvalidGeometry {
                dimension: Dimension::TankHeight,
                ..
            })
        ));
    }
}
