//! github-proxy - a minimal GitHub REST API proxy
//!
//! Exposes a fixed, server-configured GitHub account over four HTTP routes:
//! a health check, an account overview, repository detail and issue
//! creation. Each upstream-backed route makes one or two outbound calls,
//! reshapes the JSON and returns it.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): configuration, request/response shapes, errors, the upstream port
//! - **Service Layer** (`services`): the proxy operations
//! - **Adapters** (`adapters`): the reqwest GitHub client and the axum HTTP surface
//! - **Infrastructure Layer** (`infrastructure`): configuration loading and logging
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use github_proxy::{ConfigLoader, GitHubClient, ProxyHttpServer, ProxyService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load(None)?;
//!     let client = Arc::new(GitHubClient::new(&config.github)?);
//!     let server = ProxyHttpServer::new(ProxyService::new(client), config.server);
//!     server.serve().await.map_err(|e| anyhow::anyhow!(e))
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::github::GitHubClient;
pub use adapters::http::{build_router, ProxyHttpServer};
pub use domain::errors::{ProxyError, ProxyResult};
pub use domain::models::{
    Config, GitHubConfig, IssueCreationResult, LoggingConfig, NewIssue, RepoDetail, RepoSummary,
    ServerConfig, UserSummary,
};
pub use domain::ports::GitHubApi;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::logging::LoggerImpl;
pub use services::ProxyService;
