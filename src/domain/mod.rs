// Domain layer: value types passed in and out of the pricing core, plus the
// configuration seam.

pub mod model;
pub mod ports;
