//! Domain errors for the GitHub proxy.

use thiserror::Error;

/// Errors that can occur while talking to the upstream GitHub API.
///
/// Every variant collapses to the same 500 response at the HTTP layer;
/// the distinction only survives in logs.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Upstream {operation} request failed: {reason}")]
    Network {
        operation: &'static str,
        reason: String,
    },

    #[error("Upstream {operation} returned {status}: {body}")]
    UpstreamStatus {
        operation: &'static str,
        status: u16,
        body: String,
    },

    #[error("Upstream {operation} response was malformed: {reason}")]
    MalformedResponse {
        operation: &'static str,
        reason: String,
    },

    #[error("Invalid upstream request: {0}")]
    InvalidRequest(String),
}

impl ProxyError {
    /// Short, stable name of the failure kind, used as a log field.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Network { .. } => "network",
            Self::UpstreamStatus { .. } => "upstream_status",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::InvalidRequest(_) => "invalid_request",
        }
    }
}

pub type ProxyResult<T> = Result<T, ProxyError>;
