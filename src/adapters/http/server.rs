//! Inbound HTTP surface.
//!
//! Four routes: a static health check and three routes backed by the
//! upstream GitHub API. Any upstream failure becomes a 500 carrying a fixed,
//! route-specific message; the failure detail only goes to the log.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::errors::ProxyError;
use crate::domain::models::{IssueCreationResult, NewIssue, RepoDetail, ServerConfig, UserSummary};
use crate::domain::ports::GitHubApi;
use crate::infrastructure::logging::scrub_secrets;
use crate::services::ProxyService;

/// Body of the health check route.
pub const HEALTH_MESSAGE: &str = "Home route";

const OVERVIEW_FAILED: &str = "Failed to fetch GitHub data";
const REPO_FAILED: &str = "Failed to fetch repository data";
const ISSUE_FAILED: &str = "Failed to create GitHub issue";
const INVALID_ISSUE_PAYLOAD: &str = "Invalid issue payload";

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared state for the HTTP server.
struct AppState<G: GitHubApi> {
    service: ProxyService<G>,
}

/// Build the router for the proxy.
///
/// Exposed separately from [`ProxyHttpServer`] so the routes can be driven
/// in-process without binding a socket.
pub fn build_router<G: GitHubApi + 'static>(service: ProxyService<G>, enable_cors: bool) -> Router {
    let state = Arc::new(AppState { service });

    let app = Router::new()
        .route("/", get(health_check))
        .route("/github", get(account_overview::<G>))
        .route("/github/{repo_name}", get(repo_detail::<G>))
        .route("/github/{repo_name}/issues", post(create_issue::<G>))
        .with_state(state);

    if enable_cors {
        app.layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
            .layer(TraceLayer::new_for_http())
    } else {
        app.layer(TraceLayer::new_for_http())
    }
}

/// GitHub proxy HTTP server.
pub struct ProxyHttpServer<G: GitHubApi + 'static> {
    config: ServerConfig,
    service: ProxyService<G>,
}

impl<G: GitHubApi + 'static> ProxyHttpServer<G> {
    pub fn new(service: ProxyService<G>, config: ServerConfig) -> Self {
        Self { config, service }
    }

    fn addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.config.host, self.config.port).parse()
    }

    /// Start the server.
    pub async fn serve(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    /// Start the server with a shutdown signal.
    ///
    /// In-flight requests are allowed to finish once `shutdown` resolves.
    pub async fn serve_with_shutdown<F>(
        self,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = self.addr()?;
        let router = build_router(self.service, self.config.enable_cors);

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Server is running at http://{}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}

// Handler functions

async fn health_check() -> &'static str {
    HEALTH_MESSAGE
}

async fn account_overview<G: GitHubApi + 'static>(
    State(state): State<Arc<AppState<G>>>,
) -> Result<Json<UserSummary>, ApiError> {
    state
        .service
        .account_overview()
        .await
        .map(Json)
        .map_err(|e| upstream_failure(OVERVIEW_FAILED, &e))
}

async fn repo_detail<G: GitHubApi + 'static>(
    State(state): State<Arc<AppState<G>>>,
    Path(repo_name): Path<String>,
) -> Result<Json<RepoDetail>, ApiError> {
    state
        .service
        .repo_detail(&repo_name)
        .await
        .map(Json)
        .map_err(|e| upstream_failure(REPO_FAILED, &e))
}

async fn create_issue<G: GitHubApi + 'static>(
    State(state): State<Arc<AppState<G>>>,
    Path(repo_name): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<IssueCreationResult>), ApiError> {
    let issue = parse_issue(&body)?;

    state
        .service
        .create_issue(&repo_name, &issue)
        .await
        .map(|created| (StatusCode::CREATED, Json(created)))
        .map_err(|e| upstream_failure(ISSUE_FAILED, &e))
}

/// Decode an issue payload without judging its fields.
///
/// An empty body counts as `{}`; anything that is not a JSON object is
/// rejected before going upstream.
fn parse_issue(body: &[u8]) -> Result<NewIssue, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(NewIssue::default());
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| invalid_payload(&e))?;
    if !value.is_object() {
        return Err(invalid_payload(&"payload is not a JSON object"));
    }
    serde_json::from_value(value).map_err(|e| invalid_payload(&e))
}

fn invalid_payload(reason: &dyn std::fmt::Display) -> ApiError {
    tracing::warn!(error = %reason, "rejected issue payload");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: INVALID_ISSUE_PAYLOAD.to_string(),
        }),
    )
}

/// Log an upstream failure and collapse it into the route's 500 response.
fn upstream_failure(message: &str, err: &ProxyError) -> ApiError {
    tracing::error!(
        kind = err.kind(),
        detail = %scrub_secrets(&err.to_string()),
        "{message}"
    );
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
