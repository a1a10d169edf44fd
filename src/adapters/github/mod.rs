//! GitHub REST API adapter.
//!
//! Implements the [`GitHubApi`](crate::domain::ports::GitHubApi) port over
//! reqwest and converts upstream payloads into domain shapes.

pub mod client;
pub mod models;

pub use client::GitHubClient;
