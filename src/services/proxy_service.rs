//! Proxy operations over the upstream GitHub API.

use std::sync::Arc;

use tracing::instrument;

use crate::domain::errors::ProxyResult;
use crate::domain::models::{IssueCreationResult, NewIssue, RepoDetail, UserSummary};
use crate::domain::ports::GitHubApi;

/// The three upstream-backed proxy operations.
///
/// Stateless apart from the shared client; every call goes upstream.
pub struct ProxyService<G: GitHubApi> {
    github: Arc<G>,
}

impl<G: GitHubApi> Clone for ProxyService<G> {
    fn clone(&self) -> Self {
        Self {
            github: Arc::clone(&self.github),
        }
    }
}

impl<G: GitHubApi> ProxyService<G> {
    pub fn new(github: Arc<G>) -> Self {
        Self { github }
    }

    /// Profile and repository list of the configured account.
    ///
    /// Both upstream calls are issued concurrently. The first failure fails
    /// the whole operation; a partial summary is never produced.
    #[instrument(skip(self))]
    pub async fn account_overview(&self) -> ProxyResult<UserSummary> {
        let (profile, repos) =
            futures::try_join!(self.github.get_user(), self.github.list_user_repos())?;

        tracing::debug!(
            username = %profile.username,
            repo_count = repos.len(),
            "account overview assembled"
        );
        Ok(UserSummary::new(profile, repos))
    }

    /// Metadata of one repository owned by the configured account.
    #[instrument(skip(self))]
    pub async fn repo_detail(&self, repo_name: &str) -> ProxyResult<RepoDetail> {
        self.github.get_repo(repo_name).await
    }

    /// Create an issue; repeating the call creates another issue.
    #[instrument(skip(self, issue))]
    pub async fn create_issue(
        &self,
        repo_name: &str,
        issue: &NewIssue,
    ) -> ProxyResult<IssueCreationResult> {
        let created = self.github.create_issue(repo_name, issue).await?;
        tracing::info!(repo = repo_name, number = created.number, "issue created");
        Ok(IssueCreationResult::new(repo_name, created))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ProxyError;
    use crate::domain::models::{AccountProfile, CreatedIssue, RepoSummary};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    /// In-memory upstream with switchable failures.
    #[derive(Default)]
    struct MockGitHub {
        fail_user: bool,
        fail_repos: bool,
        issues_created: AtomicU64,
        last_issue: Mutex<Option<NewIssue>>,
    }

    fn not_found(operation: &'static str) -> ProxyError {
        ProxyError::UpstreamStatus {
            operation,
            status: 404,
            body: r#"{"message":"Not Found"}"#.to_string(),
        }
    }

    #[async_trait]
    impl GitHubApi for MockGitHub {
        async fn get_user(&self) -> ProxyResult<AccountProfile> {
            if self.fail_user {
                return Err(not_found("get_user"));
            }
            Ok(AccountProfile {
                username: "octocat".to_string(),
                followers: 10,
                following: 2,
                public_repos: 2,
            })
        }

        async fn list_user_repos(&self) -> ProxyResult<Vec<RepoSummary>> {
            if self.fail_repos {
                return Err(ProxyError::Network {
                    operation: "list_user_repos",
                    reason: "connection reset".to_string(),
                });
            }
            Ok(vec![
                RepoSummary {
                    name: "zeta".to_string(),
                    url: "https://github.com/octocat/zeta".to_string(),
                    description: Some("last alphabetically, first upstream".to_string()),
                },
                RepoSummary {
                    name: "alpha".to_string(),
                    url: "https://github.com/octocat/alpha".to_string(),
                    description: None,
                },
            ])
        }

        async fn get_repo(&self, repo_name: &str) -> ProxyResult<RepoDetail> {
            if repo_name != "alpha" {
                return Err(not_found("get_repo"));
            }
            Ok(RepoDetail {
                name: "alpha".to_string(),
                description: None,
                url: "https://github.com/octocat/alpha".to_string(),
                stars: 5,
                forks: 1,
                open_issues: 0,
            })
        }

        async fn create_issue(
            &self,
            repo_name: &str,
            issue: &NewIssue,
        ) -> ProxyResult<CreatedIssue> {
            let number = self.issues_created.fetch_add(1, Ordering::SeqCst) + 1;
            *self.last_issue.lock().unwrap() = Some(issue.clone());
            Ok(CreatedIssue {
                number,
                url: format!("https://github.com/octocat/{repo_name}/issues/{number}"),
            })
        }
    }

    fn service(mock: MockGitHub) -> ProxyService<MockGitHub> {
        ProxyService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_account_overview_combines_both_calls() {
        let summary = service(MockGitHub::default()).account_overview().await.unwrap();

        assert_eq!(summary.username, "octocat");
        assert_eq!(summary.followers, 10);
        assert_eq!(summary.public_repos, 2);
        let names: Vec<_> = summary.repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha"], "upstream order must be preserved");
    }

    #[tokio::test]
    async fn test_account_overview_fails_when_profile_fails() {
        let svc = service(MockGitHub {
            fail_user: true,
            ..Default::default()
        });
        let err = svc.account_overview().await.unwrap_err();
        assert_eq!(err.kind(), "upstream_status");
    }

    #[tokio::test]
    async fn test_account_overview_fails_when_repo_list_fails() {
        let svc = service(MockGitHub {
            fail_repos: true,
            ..Default::default()
        });
        let err = svc.account_overview().await.unwrap_err();
        assert_eq!(err.kind(), "network");
    }

    #[tokio::test]
    async fn test_repo_detail_passes_through() {
        let svc = service(MockGitHub::default());
        let detail = svc.repo_detail("alpha").await.unwrap();
        assert_eq!(detail.name, "alpha");
        assert_eq!(detail.stars, 5);

        assert!(svc.repo_detail("missing").await.is_err());
    }

    #[tokio::test]
    async fn test_create_issue_is_not_idempotent() {
        let svc = service(MockGitHub::default());
        let issue = NewIssue {
            title: Some(json!("Bug X")),
            body: Some(json!("Steps to reproduce")),
        };

        let first = svc.create_issue("alpha", &issue).await.unwrap();
        let second = svc.create_issue("alpha", &issue).await.unwrap();

        assert_eq!(first.message, "New issue has been created in alpha repo");
        assert_ne!(first.url, second.url);
    }

    #[tokio::test]
    async fn test_create_issue_forwards_payload_untouched() {
        let mock = Arc::new(MockGitHub::default());
        let svc = ProxyService::new(Arc::clone(&mock));
        let issue = NewIssue {
            title: Some(json!(["not", "a", "string"])),
            body: None,
        };

        svc.create_issue("alpha", &issue).await.unwrap();

        let forwarded = mock.last_issue.lock().unwrap().clone();
        assert_eq!(forwarded, Some(issue));
    }
}
