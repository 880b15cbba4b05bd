use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, N3, P1, Z0},
};

/// Heat flow per unit length of conductor, W/m in SI.
pub type LinearHeatRate = Quantity<ISQ<P1, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Electrical resistance per unit length of conductor, Ω/m in SI.
pub type LinearResistance = Quantity<ISQ<P1, P1, N3, N2, Z0, Z0, Z0>, SI<f64>, f64>;

/// Heat capacity per unit length of conductor, J/m·K in SI.
pub type LinearHeatCapacity = Quantity<ISQ<P1, P1, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;
