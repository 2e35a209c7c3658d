// Domain layer: pass-through models of the remote service and the ports the client implements.

pub mod model;
pub mod ports;
