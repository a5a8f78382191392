// Domain layer: series models, count parsing and ports (interfaces).

pub mod count;
pub mod model;
pub mod ports;
