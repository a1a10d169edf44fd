//! Service layer: the proxy operations, independent of transport.

pub mod proxy_service;

pub use proxy_service::ProxyService;
