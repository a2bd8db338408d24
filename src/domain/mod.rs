// Domain layer: decision model, pure extraction/validation rules, and the ports
// adapters implement. No HTTP or filesystem access happens here.

pub mod model;
pub mod ports;
pub mod services;
