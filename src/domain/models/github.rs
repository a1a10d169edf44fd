//! Request and response shapes exposed by the proxy.
//!
//! These are the simplified projections of upstream records that callers
//! see. None of them are stored; each is built per request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Profile fields of the configured account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountProfile {
    pub username: String,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
}

/// Overview of the configured account: profile counters plus its repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    /// Repositories in upstream order.
    pub repos: Vec<RepoSummary>,
}

impl UserSummary {
    /// Combine a profile with its repository listing.
    pub fn new(profile: AccountProfile, repos: Vec<RepoSummary>) -> Self {
        Self {
            username: profile.username,
            followers: profile.followers,
            following: profile.following,
            public_repos: profile.public_repos,
            repos,
        }
    }
}

/// Repository projection used by the account overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
}

/// Repository projection used by the single-repository route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoDetail {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
}

/// Issue payload accepted from callers and forwarded upstream untouched.
///
/// Both fields are arbitrary JSON so that whatever the caller sent reaches
/// upstream as-is; absent fields are left out of the forwarded body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewIssue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

/// Issue returned by the upstream create call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedIssue {
    pub number: u64,
    pub url: String,
}

/// Confirmation returned to the caller after an issue is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCreationResult {
    pub message: String,
    pub url: String,
}

impl IssueCreationResult {
    pub fn new(repo_name: &str, issue: CreatedIssue) -> Self {
        Self {
            message: format!("New issue has been created in {repo_name} repo"),
            url: issue.url,
        }
    }
}
