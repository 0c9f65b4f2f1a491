// Domain layer: form models and ports (interfaces). No network or terminal code here.

pub mod model;
pub mod ports;
