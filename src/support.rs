//! Supporting utilities shared by the models in this crate.
//!
//! These modules are public because they are useful on their own, but their
//! APIs are not stable.

pub mod constraint;
pub mod units;
