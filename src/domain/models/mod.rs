pub mod config;
pub mod github;

pub use config::{Config, GitHubConfig, LogFormat, LoggingConfig, RotationPolicy, ServerConfig};
pub use github::{
    AccountProfile, CreatedIssue, IssueCreationResult, NewIssue, RepoDetail, RepoSummary,
    UserSummary,
};
