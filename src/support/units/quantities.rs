use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, P1, Z0},
};

/// Heating pace, seconds per kelvin in SI.
///
/// Heat capacity divided by power, e.g. `C / P_net` for a lumped tank.
pub type HeatingPace = Quantity<ISQ<Z0, Z0, P1, Z0, N1, Z0, Z0>, SI<f64>, f64>;
