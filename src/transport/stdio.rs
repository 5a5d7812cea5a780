use crate::github::GitHubClient;
use crate::tools::GitHubTools;
use anyhow::Result;
use rmcp::ServiceExt;
use rmcp::transport::stdio;

/// Runs the MCP server in STDIN/STDOUT mode.
///
/// This mode is used when the server is launched as a subprocess by an MCP client,
/// communicating through standard input/output streams.
///
/// # Arguments
/// * `github_client` - Executor shared by every tool invocation
///
/// # Returns
/// * `Result<()>` - Success when server shuts down cleanly, or error
///
/// # Example
/// ```no_run
/// # use github_toolbox::github::{GitHubClient, GitHubConfig};
/// # use github_toolbox::transport::stdio::run_stdio_server;
/// # async fn example() -> anyhow::Result<()> {
/// let client = GitHubClient::new(GitHubConfig::new(Some("ghp_xxxxxxxxxxxx".to_string())))?;
/// run_stdio_server(client).await?;
/// # Ok(())
/// # }
/// ```
pub async fn run_stdio_server(github_client: GitHubClient) -> Result<()> {
    let service = GitHubTools::new(github_client);

    let server = service.serve(stdio()).await?;

    server.waiting().await?;
    Ok(())
}
