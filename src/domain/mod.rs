// Domain layer: request/response models and the ports the relay depends on.

pub mod model;
pub mod ports;
