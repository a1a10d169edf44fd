//! Domain layer: configuration, request/response shapes, errors and the
//! upstream port.

pub mod errors;
pub mod models;
pub mod ports;
