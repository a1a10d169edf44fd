//! Infrastructure layer module
//!
//! Process-level concerns shared by the adapters:
//! - Configuration management
//! - Logging infrastructure

pub mod config;
pub mod logging;
