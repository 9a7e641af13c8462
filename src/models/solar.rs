//! Solar thermal models.
//!
//! This module contains models of solar collectors and the storage they charge.

pub mod collector_tank;
