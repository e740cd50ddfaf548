// Domain layer: event/result models and the publish port.

pub mod model;
pub mod ports;
