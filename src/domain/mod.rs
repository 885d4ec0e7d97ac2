// Domain layer: catalog, guidance text and ports (capabilities provided by the front end).

pub mod guidance;
pub mod model;
pub mod ports;
