//! # Twine Solar
//!
//! Solar-thermal collector and storage tank models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given a collector, a tank and a heating range, the
//! [`CollectorTank`](models::solar::collector_tank::CollectorTank) model
//! computes how long the tank fluid takes to reach its target temperature,
//! the energy delivered and lost along the way, and the heating trajectory.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`session`]: Caller-owned run lifecycle with background evaluation.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful across models or outside this crate.

pub mod models;
pub mod session;
pub mod support;
