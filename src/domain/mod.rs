// Domain layer: value objects, the CYC weight table and the plan-source port.

pub mod model;
pub mod ports;
pub mod weight;
