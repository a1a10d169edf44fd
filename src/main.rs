//! github-proxy server entry point.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use github_proxy::{ConfigLoader, GitHubClient, LoggerImpl, ProxyHttpServer, ProxyService};

#[derive(Parser, Debug)]
#[command(name = "github-proxy")]
#[command(about = "HTTP proxy exposing a fixed GitHub account's profile, repositories and issues")]
#[command(version)]
struct Args {
    /// Path to a YAML config file (defaults to ./github-proxy.yaml when present)
    #[arg(long, short, env = "GITHUB_PROXY_CONFIG")]
    config: Option<PathBuf>,

    /// Host to bind to, overriding the config
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overriding the config
    #[arg(long, short)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is normal outside development.
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config =
        ConfigLoader::load(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let _logger = LoggerImpl::init(&config.logging)?;

    tracing::info!(
        account = %config.github.account,
        api_base_url = %config.github.api_base_url,
        timeout_secs = config.github.timeout_secs,
        "Starting github-proxy"
    );

    let client = Arc::new(GitHubClient::new(&config.github)?);
    let server = ProxyHttpServer::new(ProxyService::new(client), config.server);

    server
        .serve_with_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow!(e))
        .context("HTTP server failed")?;

    tracing::info!("github-proxy stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}
