// Domain layer: request models and ports (interfaces). No HTTP or CLI details here.

pub mod model;
pub mod ports;
