// Domain layer: models and the HTTP port. No knowledge of reqwest beyond the method type.

pub mod model;
pub mod ports;
