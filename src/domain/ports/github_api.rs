use async_trait::async_trait;

use crate::domain::errors::ProxyResult;
use crate::domain::models::{AccountProfile, CreatedIssue, NewIssue, RepoDetail, RepoSummary};

/// Upstream GitHub-compatible REST API, scoped to one configured account.
///
/// Implementations attach credentials themselves; callers only name the
/// repository. No method retries.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Fetch the configured account's profile.
    async fn get_user(&self) -> ProxyResult<AccountProfile>;

    /// List the configured account's repositories in upstream order.
    async fn list_user_repos(&self) -> ProxyResult<Vec<RepoSummary>>;

    /// Fetch a single repository owned by the configured account.
    async fn get_repo(&self, repo_name: &str) -> ProxyResult<RepoDetail>;

    /// Create an issue in a repository owned by the configured account.
    async fn create_issue(&self, repo_name: &str, issue: &NewIssue) -> ProxyResult<CreatedIssue>;
}
