// Domain layer: transient request/reply values and the ports the stages are written against.

pub mod model;
pub mod ports;
