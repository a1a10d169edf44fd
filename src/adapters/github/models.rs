//! GitHub REST API response models.
//!
//! These structs map to the GitHub REST API v3 JSON payloads. Only the
//! fields the proxy reads are declared; serde ignores the rest. They are
//! converted into domain shapes right after deserialization.

use serde::{Deserialize, Serialize};

use crate::domain::models::{AccountProfile, CreatedIssue, RepoDetail, RepoSummary};

/// A user returned by `GET /users/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    /// Account login name.
    pub login: String,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
}

impl From<GitHubUser> for AccountProfile {
    fn from(user: GitHubUser) -> Self {
        Self {
            username: user.login,
            followers: user.followers,
            following: user.following,
            public_repos: user.public_repos,
        }
    }
}

/// An entry of `GET /users/{username}/repos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepoListing {
    pub name: String,
    /// URL to view the repository in the GitHub UI.
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<GitHubRepoListing> for RepoSummary {
    fn from(repo: GitHubRepoListing) -> Self {
        Self {
            name: repo.name,
            url: repo.html_url,
            description: repo.description,
        }
    }
}

/// A repository returned by `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
}

impl From<GitHubRepository> for RepoDetail {
    fn from(repo: GitHubRepository) -> Self {
        Self {
            name: repo.name,
            description: repo.description,
            url: repo.html_url,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            open_issues: repo.open_issues_count,
        }
    }
}

/// Response from the create-issue endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubCreateIssueResponse {
    /// Issue number within the repository.
    pub number: u64,
    /// URL to view the issue in the GitHub UI.
    pub html_url: String,
}

impl From<GitHubCreateIssueResponse> for CreatedIssue {
    fn from(resp: GitHubCreateIssueResponse) -> Self {
        Self {
            number: resp.number,
            url: resp.html_url,
        }
    }
}
