// Domain layer: catalog model and the ports the pipeline talks through.

pub mod model;
pub mod ports;
