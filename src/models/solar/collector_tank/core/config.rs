//! Fixed physical properties the simulation input does not carry.
//!
//! The input describes geometry, sunshine, and temperatures only. The
//! working fluid and the wall through which the tank loses heat are supplied
//! here, with defaults for a water tank behind a 50 mm wall in a 20 °C room.

use uom::si::{
    f64::{Length, MassDensity, SpecificHeatCapacity, ThermodynamicTemperature},
    length::millimeter,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// Engine configuration: the tank fluid and its wall.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineConfig {
    /// Fluid held by the storage tank.
    pub fluid: FluidProperties,

    /// Wall through which the tank conducts heat to its surroundings.
    pub wall: WallProperties,
}

/// Constant properties of an incompressible tank fluid.
///
/// Both values are guaranteed to be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    density: MassDensity,
    specific_heat: SpecificHeatCapacity,
}

impl FluidProperties {
    /// Constructs validated fluid properties.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is not strictly positive.
    pub fn new(density: MassDensity, specific_heat: SpecificHeatCapacity) -> ConstraintResult<Self> {
        let density = Constrained::<MassDensity, StrictlyPositive>::new(density)?;
        let specific_heat = Constrained::<SpecificHeatCapacity, StrictlyPositive>::new(specific_heat)?;
        Ok(Self::from_constrained(density, specific_heat))
    }

    /// Constructs fluid properties from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        density: Constrained<MassDensity, StrictlyPositive>,
        specific_heat: Constrained<SpecificHeatCapacity, StrictlyPositive>,
    ) -> Self {
        Self {
            density: density.into_inner(),
            specific_heat: specific_heat.into_inner(),
        }
    }

    /// Liquid water: 1000 kg/m³ and 4186 J/kg·K.
    #[must_use]
    pub fn water() -> Self {
        Self {
            density: MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4186.0),
        }
    }

    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density
    }

    #[must_use]
    pub fn specific_heat(&self) -> SpecificHeatCapacity {
        self.specific_heat
    }
}

impl Default for FluidProperties {
    fn default() -> Self {
        Self::water()
    }
}

/// Tank wall used by the conduction loss estimate.
///
/// The wall thickness is guaranteed to be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallProperties {
    thickness: Length,
    ambient_temperature: ThermodynamicTemperature,
}

impl WallProperties {
    /// Constructs a validated wall.
    ///
    /// # Errors
    ///
    /// Returns an error if `thickness` is not strictly positive.
    pub fn new(thickness: Length, ambient_temperature: ThermodynamicTemperature) -> ConstraintResult<Self> {
        let thickness = Constrained::<Length, StrictlyPositive>::new(thickness)?;
        Ok(Self {
            thickness: thickness.into_inner(),
            ambient_temperature,
        })
    }

    /// Wall thickness.
    #[must_use]
    pub fn thickness(&self) -> Length {
        self.thickness
    }

    /// Temperature of the air surrounding the tank.
    #[must_use]
    pub fn ambient_temperature(&self) -> ThermodynamicTemperature {
        self.ambient_temperature
    }
}

impl Default for WallProperties {
    fn default() -> Self {
        Self {
            thickness: Length::new::<millimeter>(50.0),
            ambient_temperature: ThermodynamicTemperature::new::<degree_celsius>(20.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::meter;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn default_is_water_behind_insulated_wall() {
        let config = EngineConfig::default();

        assert_eq!(config.fluid, FluidProperties::water());
        assert_relative_eq!(
            config.fluid.density().get::<kilogram_per_cubic_meter>(),
            1000.0
        );
        assert_relative_eq!(
            config.fluid.specific_heat().get::<joule_per_kilogram_kelvin>(),
            4186.0
        );
        assert_relative_eq!(config.wall.thickness().get::<meter>(), 0.05, epsilon = 1e-15);
        assert_relative_eq!(
            config.wall.ambient_temperature().get::<degree_celsius>(),
            20.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn rejects_non_physical_fluid() {
        let result = FluidProperties::new(
            MassDensity::new::<kilogram_per_cubic_meter>(0.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4186.0),
        );
        assert_eq!(result, Err(ConstraintError::Zero));

        let result = FluidProperties::new(
            MassDensity::new::<kilogram_per_cubic_meter>(1030.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(-1.0),
        );
        assert_eq!(result, Err(ConstraintError::Negative));
    }

    #[test]
    fn rejects_zero_wall_thickness() {
        let ambient = ThermodynamicTemperature::new::<degree_celsius>(15.0);
        assert!(WallProperties::new(Length::new::<meter>(0.0), ambient).is_err());

        let wall = WallProperties::new(Length::new::<millimeter>(10.0), ambient).unwrap();
        assert_relative_eq!(wall.thickness().get::<meter>(), 0.01, epsilon = 1e-15);
    }
}
