//! Extensions to [`uom`].
//!
//! All physical values in this crate are [`uom`] quantities. This module adds
//! the few pieces the solar models need that [`uom`] does not provide.
//!
//! ## Temperature differences
//!
//! [`TemperatureDifference::minus`] subtracts one absolute temperature from
//! another and returns a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval, thermodynamic_temperature::degree_celsius};
//! use twine_solar::support::units::TemperatureDifference;
//!
//! let target = ThermodynamicTemperature::new::<degree_celsius>(40.0);
//! let start = ThermodynamicTemperature::new::<degree_celsius>(20.0);
//! let rise = target.minus(start);
//! assert!((rise.get::<temperature_interval::kelvin>() - 20.0).abs() < 1e-12);
//! ```
//!
//! ## Heating pace
//!
//! [`HeatingPace`] is time per unit temperature rise (s/K in SI). The tank
//! integrator steps in temperature, so this is the derivative of elapsed time.

mod quantities;
mod temperature_difference;

pub use quantities::HeatingPace;
pub use temperature_difference::TemperatureDifference;
