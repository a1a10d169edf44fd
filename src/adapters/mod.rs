//! Adapters: the outbound GitHub client and the inbound HTTP surface.

pub mod github;
pub mod http;
