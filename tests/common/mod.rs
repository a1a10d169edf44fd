//! Shared helpers for the HTTP integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use github_proxy::{build_router, GitHubClient, GitHubConfig, ProxyService};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_ACCOUNT: &str = "octocat";

pub fn github_config(base_url: &str) -> GitHubConfig {
    GitHubConfig {
        api_base_url: base_url.to_string(),
        token: TEST_TOKEN.to_string(),
        account: TEST_ACCOUNT.to_string(),
        ..Default::default()
    }
}

/// Router wired to a real client pointed at `config`.
pub fn router_with(config: &GitHubConfig) -> Router {
    let client = Arc::new(GitHubClient::new(config).unwrap());
    build_router(ProxyService::new(client), true)
}

pub fn router_for(base_url: &str) -> Router {
    router_with(&github_config(base_url))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body should be UTF-8")
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(router: &Router, uri: &str) -> TestResponse {
    send(router, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(router: &Router, uri: &str, body: &str) -> TestResponse {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

pub fn user_json() -> Value {
    serde_json::json!({
        "login": "octocat",
        "id": 583231,
        "name": "The Octocat",
        "followers": 9000,
        "following": 9,
        "public_repos": 2
    })
}

pub fn repos_json() -> Value {
    serde_json::json!([
        {
            "id": 2,
            "name": "zeta",
            "html_url": "https://github.com/octocat/zeta",
            "description": "listed first upstream",
            "stargazers_count": 1,
            "forks_count": 0,
            "open_issues_count": 0
        },
        {
            "id": 1,
            "name": "alpha",
            "html_url": "https://github.com/octocat/alpha",
            "description": null,
            "stargazers_count": 3,
            "forks_count": 1,
            "open_issues_count": 2
        }
    ])
}

pub fn repo_json(name: &str) -> Value {
    serde_json::json!({
        "id": 1296269,
        "name": name,
        "full_name": format!("octocat/{name}"),
        "description": "This your first repo!",
        "html_url": format!("https://github.com/octocat/{name}"),
        "stargazers_count": 80,
        "forks_count": 9,
        "open_issues_count": 4
    })
}
