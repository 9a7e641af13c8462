//! Construction-time numeric constraints.
//!
//! Inputs to the solar models arrive from an external form or caller and are
//! re-checked before any physics runs. The types here carry the result of that
//! check, so a dimension that passed through [`StrictlyPositive`] can be used
//! as a divisor without a second look.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: Greater than zero (lengths, densities, wall thickness)
//! - [`NonNegative`]: Zero or greater (solar flux, wall conductivity)
//! - [`UnitInterval`]: Closed unit interval `0 ≤ x ≤ 1` (collector efficiency)
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper, where
//! `C` implements [`Constraint<T>`]. Markers also provide an associated
//! `new()` constructor, e.g. `StrictlyPositive::new(Length::new::<meter>(2.0))`.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval};

/// A numeric invariant checked when a [`Constrained`] value is built.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Reason a value was rejected by a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that satisfied constraint `C` when it was constructed.
///
/// # Example
///
/// ```
/// use twine_solar::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::meter};
///
/// let height = Constrained::<_, StrictlyPositive>::new(Length::new::<meter>(1.5)).unwrap();
/// assert_eq!(height.into_inner().get::<meter>(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Copy, C: Constraint<T>> Constrained<T, C> {
    /// Returns a copy of the inner value.
    pub fn get(&self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
