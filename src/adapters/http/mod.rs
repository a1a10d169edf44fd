//! Inbound HTTP adapter built on axum.

pub mod server;

pub use server::{build_router, ErrorResponse, ProxyHttpServer, HEALTH_MESSAGE};
