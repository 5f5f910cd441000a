// Domain layer: panel models, the session state container and ports (interfaces).

pub mod model;
pub mod ports;
pub mod session;
