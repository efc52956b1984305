// Domain layer: loop results and the ports that feed settings into the engine.

pub mod model;
pub mod ports;
