// Domain layer: catalog, decision and transcript types plus the scorer port.

pub mod model;
pub mod ports;
