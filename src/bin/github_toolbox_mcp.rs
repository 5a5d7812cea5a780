use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use tracing_subscriber::{self, layer::SubscriberExt, util::SubscriberInitExt};

use github_toolbox::github::config::DEFAULT_API_BASE_URL;
use github_toolbox::github::{GitHubClient, GitHubConfig};

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "GitHub Toolbox MCP Server - Model Context Protocol server proxying GitHub REST operations"
)]
#[command(
    long_about = "GitHub Toolbox MCP Server exposes GitHub repository, issue, branch, file, pull request, webhook and workflow operations as MCP tools. Every tool returns a plain-text summary; GitHub failures are reported as text instead of protocol errors. Supports both stdio and HTTP/SSE interfaces for integration with MCP clients like Claude Desktop."
)]
#[command(propagate_version = true)]
#[command(disable_version_flag = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GitHubArgs {
    /// Enable debug logging for troubleshooting and development
    #[arg(short, long)]
    debug: bool,

    /// GitHub personal access token for API authentication (overrides GITHUB_TOKEN environment variable)
    #[arg(short = 't', long)]
    github_token: Option<String>,

    /// Base URL of the GitHub REST API, e.g. for GitHub Enterprise Server
    #[arg(long, env = "GITHUB_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    api_base_url: String,
}

impl GitHubArgs {
    fn into_config(self) -> GitHubConfig {
        // Use github_token directly or get from environment
        let github_token = self
            .github_token
            .or_else(|| std::env::var("GITHUB_TOKEN").ok());

        GitHubConfig::new(github_token).with_api_base_url(self.api_base_url)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the server in stdin/stdout mode for MCP client integration like Claude Desktop
    Stdio {
        #[command(flatten)]
        github: GitHubArgs,
    },
    /// Run the server with HTTP/SSE interface for web-based access and testing
    Http {
        /// Address to bind the HTTP server to
        #[arg(short, long, default_value = "0.0.0.0:8080")]
        address: String,

        #[command(flatten)]
        github: GitHubArgs,
    },
}

fn init_tracing(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    // stdout carries the MCP stream in stdio mode, so logs always go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    format!(
                        "info,github_toolbox={},{}={}",
                        level,
                        env!("CARGO_CRATE_NAME"),
                        level
                    )
                    .into()
                }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn build_client(config: GitHubConfig) -> Result<GitHubClient> {
    if config.is_authenticated() {
        tracing::info!("Using GitHub token for API authentication");
    } else {
        tracing::warn!("No GitHub token configured; requests are unauthenticated");
    }
    tracing::debug!("GitHub API base URL: {}", config.api_base_url);

    GitHubClient::new(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Stdio { github } => {
            init_tracing(github.debug);
            let client = build_client(github.into_config())?;

            github_toolbox::transport::stdio::run_stdio_server(client).await
        }
        Commands::Http { address, github } => {
            init_tracing(github.debug);
            let client = build_client(github.into_config())?;

            run_http_server(address, client).await
        }
    }
}

async fn run_http_server(address: String, github_client: GitHubClient) -> Result<()> {
    // Parse socket address
    let addr: SocketAddr = address
        .parse()
        .with_context(|| format!("Invalid bind address: {}", address))?;

    tracing::info!("Access the GitHub Toolbox MCP Server at http://{}/sse", addr);

    let app = github_toolbox::transport::sse_server::SseServerApp::new(addr, github_client);
    app.serve().await?;

    Ok(())
}
