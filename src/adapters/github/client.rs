//! GitHub HTTP client.
//!
//! Wraps the GitHub REST API v3 for the four calls the proxy makes. All
//! calls are scoped to the configured account and carry the configured
//! bearer token. Nothing is retried or rate limited here.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::domain::errors::{ProxyError, ProxyResult};
use crate::domain::models::{
    AccountProfile, CreatedIssue, GitHubConfig, NewIssue, RepoDetail, RepoSummary,
};
use crate::domain::ports::GitHubApi;

use super::models::{GitHubCreateIssueResponse, GitHubRepoListing, GitHubRepository, GitHubUser};

const GITHUB_API_VERSION: &str = "2022-11-28";

/// HTTP client for the GitHub REST API v3.
///
/// All methods return [`ProxyResult`]; transport failures, non-success
/// statuses and undecodable bodies map to the matching [`ProxyError`].
#[derive(Debug, Clone)]
pub struct GitHubClient {
    /// The underlying HTTP client, with auth and API headers preset.
    http: Client,
    /// Base URL of the upstream API.
    base_url: Url,
    /// Account every call is scoped to.
    account: String,
}

impl GitHubClient {
    /// Build a client from the upstream configuration.
    ///
    /// Fails if the base URL does not parse or the token cannot be used as
    /// a header value.
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let base_url = Url::parse(&config.api_base_url)
            .with_context(|| format!("Invalid GitHub API base URL: {}", config.api_base_url))?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .context("GitHub token is not a valid header value")?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).context("Invalid User-Agent value")?,
        );

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url,
            account: config.account.clone(),
        })
    }

    /// The account every call is scoped to.
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Append path segments to the base URL.
    ///
    /// Each segment is percent-encoded on its own, so a repository name
    /// containing `/` or `?` stays a single segment.
    fn endpoint(&self, segments: &[&str]) -> ProxyResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ProxyError::InvalidRequest(format!(
                    "{} cannot be used as a base URL",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and decode a successful JSON response.
    async fn send<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> ProxyResult<T> {
        let resp = request.send().await.map_err(|e| ProxyError::Network {
            operation,
            reason: e.to_string(),
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ProxyError::UpstreamStatus {
                operation,
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                ProxyError::MalformedResponse {
                    operation,
                    reason: e.to_string(),
                }
            } else {
                ProxyError::Network {
                    operation,
                    reason: e.to_string(),
                }
            }
        })
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn get_user(&self) -> ProxyResult<AccountProfile> {
        let url = self.endpoint(&["users", &self.account])?;
        tracing::debug!(%url, "fetching account profile");
        let user: GitHubUser = self.send("get_user", self.http.get(url)).await?;
        Ok(user.into())
    }

    async fn list_user_repos(&self) -> ProxyResult<Vec<RepoSummary>> {
        let url = self.endpoint(&["users", &self.account, "repos"])?;
        tracing::debug!(%url, "listing account repositories");
        let repos: Vec<GitHubRepoListing> = self.send("list_user_repos", self.http.get(url)).await?;
        Ok(repos.into_iter().map(RepoSummary::from).collect())
    }

    async fn get_repo(&self, repo_name: &str) -> ProxyResult<RepoDetail> {
        let url = self.endpoint(&["repos", &self.account, repo_name])?;
        tracing::debug!(%url, "fetching repository");
        let repo: GitHubRepository = self.send("get_repo", self.http.get(url)).await?;
        Ok(repo.into())
    }

    async fn create_issue(&self, repo_name: &str, issue: &NewIssue) -> ProxyResult<CreatedIssue> {
        let url = self.endpoint(&["repos", &self.account, repo_name, "issues"])?;
        tracing::debug!(%url, "creating issue");
        let created: GitHubCreateIssueResponse = self
            .send("create_issue", self.http.post(url).json(issue))
            .await?;
        Ok(created.into())
    }
}
