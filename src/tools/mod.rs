//! MCP (Model Context Protocol) tool implementations for GitHub Toolbox
//!
//! This module provides the MCP server interface, exposing GitHub REST
//! operations as tools that can be used by AI assistants and other MCP clients.
//!
//! ## Features
//!
//! - Search repositories and create/delete repositories
//! - Manage issues, branches, files, pull requests and webhooks
//! - Inspect GitHub Actions workflow runs
//!
//! Every tool answers with a single text block. GitHub failures are reported
//! as `"Unable to <action>: <message>"` text rather than protocol errors.

use crate::github::GitHubClient;
use crate::types::{Branch, Pagination, RepositoryId};
use rmcp::{Error as McpError, ServerHandler, model::*, tool};

/// Error types specific to tool operations
pub mod error;

/// Tool function implementations organized by functionality
pub mod functions;

/// Wrapper for GitHub tools exposed through the MCP protocol
#[derive(Clone)]
pub struct GitHubTools {
    github_client: GitHubClient,
}

fn text_result(text: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult {
        content: vec![Content::text(text)],
        is_error: Some(false),
    })
}

impl GitHubTools {
    /// Creates a new GitHubTools instance sharing the given client
    pub fn new(github_client: GitHubClient) -> Self {
        Self { github_client }
    }

    pub fn github_client(&self) -> &GitHubClient {
        &self.github_client
    }
}

#[tool(tool_box)]
impl GitHubTools {
    #[tool(
        description = "Search GitHub repositories by query. Supports GitHub search syntax. Returns name, description, stars and URL of each repository. Examples: `{\"query\": \"language:rust stars:>1000\"}`, `{\"query\": \"tokio\", \"per_page\": 5, \"page\": 2}`"
    )]
    async fn search_repositories(
        &self,
        #[tool(param)]
        #[schemars(
            description = "Search keywords with optional qualifiers. Examples: 'language:go stars:>1000', 'topic:mcp'"
        )]
        query: String,
        #[tool(param)]
        #[schemars(description = "Number of results per page (default 30, max 100)")]
        per_page: Option<u32>,
        #[tool(param)]
        #[schemars(description = "Page number (default 1)")]
        page: Option<u32>,
    ) -> Result<CallToolResult, McpError> {
        text_result(
            functions::search::search_repositories(
                &self.github_client,
                &query,
                Pagination::new(per_page, page),
            )
            .await,
        )
    }

    #[tool(description = "Create a GitHub issue. Returns the issue number, title, state and URL.")]
    async fn create_issue(
        &self,
        #[tool(param)]
        #[schemars(description = "Repository owner")]
        owner: String,
        #[tool(param)]
        #[schemars(description = "Repository name")]
        repo: String,
        #[tool(param)]
        #[schemars(description = "Issue title")]
        title: String,
        #[tool(param)]
        #[schemars(description = "Issue description (markdown)")]
        body: String,
    ) -> Result<CallToolResult, McpError> {
        let repository_id = RepositoryId::new(owner, repo);
        text_result(
            functions::issue::create_issue(&self.github_client, &repository_id, &title, &body)
                .await,
        )
    }

    #[tool(
        description = "Create a new repository for the authenticated user. The repository is initialized with a README."
    )]
    async fn create_repository(
        &self,
        #[tool(param)]
        #[schemars(description = "Repository name")]
        name: String,
        #[tool(param)]
        #[schemars(description = "Repository description (default: empty)")]
        description: Option<String>,
        #[tool(param)]
        #[schemars(description = "Whether the repository should be private (default: false)")]
        private: Option<bool>,
    ) -> Result<CallToolResult, McpError> {
        text_result(
            functions::repository::create_repository(
                &self.github_client,
                &name,
                description.as_deref().unwrap_or_default(),
                private.unwrap_or(false),
            )
            .await,
        )
    }

    #[tool(description = "Delete a GitHub repository. This cannot be undone.")]
    async fn delete_repository(
        &self,
        #[tool(param)]
        #[schemars(description = "Repository owner")]
        owner: String,
        #[tool(param)]
        #[schemars(description = "Repository name")]
        repo: String,
    ) -> Result<CallToolResult, McpError> {
        let repository_id = RepositoryId::new(owner, repo);
        text_result(
            functions::repository::delete_repository(&self.github_client, &repository_id).await,
        )
    }

    #[tool(description = "List branches in a GitHub repository with their head commit SHA.")]
    async fn list_branches(
        &self,
        #[tool(param)]
        #[schemars(description = "Repository owner")]
        owner: String,
        #[tool(param)]
        #[schemars(description = "Repository name")]
        repo: String,
        #[tool(param)]
        #[schemars(description = "Number of results per page (default 30, max 100)")]
        per_page: Option<u32>,
        #[tool(param)]
        #[schemars(description = "Page number (default 1)")]
        page: Option<u32>,
    ) -> Result<CallToolResult, McpError> {
        let repository_id = RepositoryId::new(owner, repo);
        text_result(
            functions::branch::list_branches(
                &self.github_client,
                &repository_id,
                Pagination::new(per_page, page),
            )
            .await,
        )
    }

    #[tool(
        description = "Create a new branch from the head commit of an existing branch. Examples: `{\"owner\": \"octocat\", \"repo\": \"hello\", \"branch_name\": \"feature/login\"}`"
    )]
    async fn create_branch(
        &self,
        #[tool(param)]
        #[schemars(description = "Repository owner")]
        owner: String,
        #[tool(param)]
        #[schemars(description = "Repository name")]
        repo: String,
        #[tool(param)]
        #[schemars(description = "Name for the new branch")]
        branch_name: String,
        #[tool(param)]
        #[schemars(description = "Source branch to create from (default: main)")]
        source_branch: Option<String>,
    ) -> Result<CallToolResult, McpError> {
        let repository_id = RepositoryId::new(owner, repo);
        let source_branch = Branch::or_default(source_branch);
        text_result(
            functions::branch::create_branch(
                &self.github_client,
                &repository_id,
                &Branch::new(branch_name),
                &source_branch,
            )
            .await,
        )
    }

    #[tool(description = "Delete a branch in a GitHub repository.")]
    async fn delete_branch(
        &self,
        #[tool(param)]
        #[schemars(description = "Repository owner")]
        owner: String,
        #[tool(param)]
        #[schemars(description = "Repository name")]
        repo: String,
        #[tool(param)]
        #[schemars(description = "Name of the branch to delete")]
        branch_name: String,
    ) -> Result<CallToolResult, McpError> {
        let repository_id = RepositoryId::new(owner, repo);
        text_result(
            functions::branch::delete_branch(
                &self.github_client,
                &repository_id,
                &Branch::new(branch_name),
            )
            .await,
        )
    }

    #[tool(
        description = "Get a file's metadata and text content, or list a directory, at a branch."
    )]
    async fn get_file_contents(
        &self,
        #[tool(param)]
        #[schemars(description = "Repository owner")]
        owner: String,
        #[tool(param)]
        #[schemars(description = "Repository name")]
        repo: String,
        #[tool(param)]
        #[schemars(
            description = "File or directory path in the repository. Examples: 'README.md', 'src/lib.rs'"
        )]
        path: String,
        #[tool(param)]
        #[schemars(description = "Branch name (default: main)")]
        branch: Option<String>,
    ) -> Result<CallToolResult, McpError> {
        let repository_id = RepositoryId::new(owner, repo);
        let branch = Branch::or_default(branch);
        text_result(
            functions::file::get_file_contents(&self.github_client, &repository_id, &path, &branch)
                .await,
        )
    }

    #[tool(
        description = "Create or update a file in a GitHub repository with a single commit. An existing file at the path is overwritten."
    )]
    async fn create_or_update_file(
        &self,
        #[tool(param)]
        #[schemars(description = "Repository owner")]
        owner: String,
        #[tool(param)]
        #[schemars(description = "Repository name")]
        repo: String,
        #[tool(param)]
        #[schemars(description = "File path in the repository")]
        path: String,
        #[tool(param)]
        #[schemars(description = "New file content (plain text)")]
        content: String,
        #[tool(param)]
        #[schemars(description = "Commit message")]
        message: String,
        #[tool(param)]
        #[schemars(description = "Branch name (default: main)")]
        branch: Option<String>,
    ) -> Result<CallToolResult, McpError> {
        let repository_id = RepositoryId::new(owner, repo);
        let branch = Branch::or_default(branch);
        text_result(
            functions::file::create_or_update_file(
                &self.github_client,
                &repository_id,
                &path,
                &content,
                &message,
                &branch,
            )
            .await,
        )
    }

    #[tool(description = "Create a pull request in a GitHub repository.")]
    async fn create_pull_request(
        &self,
        #[tool(param)]
        #[schemars(description = "Repository owner")]
        owner: String,
        #[tool(param)]
        #[schemars(description = "Repository name")]
        repo: String,
        #[tool(param)]
        #[schemars(description = "Pull request title")]
        title: String,
        #[tool(param)]
        #[schemars(description = "The name of the branch where changes are implemented")]
        head: String,
        #[tool(param)]
        #[schemars(
            description = "The name of the branch you want the changes pulled into (default: main)"
        )]
        base: Option<String>,
        #[tool(param)]
        #[schemars(description = "Pull request description (default: empty)")]
        body: Option<String>,
    ) -> Result<CallToolResult, McpError> {
        let repository_id = RepositoryId::new(owner, repo);
        let base = Branch::or_default(base);
        text_result(
            functions::pull_request::create_pull_request(
                &self.github_client,
                &repository_id,
                &title,
                &Branch::new(head),
                &base,
                body.as_deref().unwrap_or_default(),
            )
            .await,
        )
    }

    #[tool(description = "List pull requests in a GitHub repository.")]
    async fn list_pull_requests(
        &self,
        #[tool(param)]
        #[schemars(description = "Repository owner")]
        owner: String,
        #[tool(param)]
        #[schemars(description = "Repository name")]
        repo: String,
        #[tool(param)]
        #[schemars(description = "Pull request state: open, closed or all (default: open)")]
        state: Option<String>,
        #[tool(param)]
        #[schemars(description = "Number of results per page (default 30, max 100)")]
        per_page: Option<u32>,
        #[tool(param)]
        #[schemars(description = "Page number (default 1)")]
        page: Option<u32>,
    ) -> Result<CallToolResult, McpError> {
        let repository_id = RepositoryId::new(owner, repo);
        let state = state
            .unwrap_or_else(|| functions::pull_request::DEFAULT_PULL_REQUEST_STATE.to_string());
        text_result(
            functions::pull_request::list_pull_requests(
                &self.github_client,
                &repository_id,
                &state,
                Pagination::new(per_page, page),
            )
            .await,
        )
    }

    #[tool(description = "Merge a pull request in a GitHub repository.")]
    async fn merge_pull_request(
        &self,
        #[tool(param)]
        #[schemars(description = "Repository owner")]
        owner: String,
        #[tool(param)]
        #[schemars(description = "Repository name")]
        repo: String,
        #[tool(param)]
        #[schemars(description = "Pull request number")]
        pull_number: u64,
        #[tool(param)]
        #[schemars(description = "Title for the merge commit (default: GitHub's generated title)")]
        commit_title: Option<String>,
    ) -> Result<CallToolResult, McpError> {
        let repository_id = RepositoryId::new(owner, repo);
        text_result(
            functions::pull_request::merge_pull_request(
                &self.github_client,
                &repository_id,
                pull_number,
                commit_title.as_deref().unwrap_or_default(),
            )
            .await,
        )
    }

    #[tool(
        description = "Create a webhook in a GitHub repository. Payloads are delivered as JSON."
    )]
    async fn create_webhook(
        &self,
        #[tool(param)]
        #[schemars(description = "Repository owner")]
        owner: String,
        #[tool(param)]
        #[schemars(description = "Repository name")]
        repo: String,
        #[tool(param)]
        #[schemars(description = "Webhook payload URL")]
        url: String,
        #[tool(param)]
        #[schemars(
            description = "Events that trigger the webhook (default: ['push']). Examples: ['push', 'pull_request']"
        )]
        events: Option<Vec<String>>,
    ) -> Result<CallToolResult, McpError> {
        let repository_id = RepositoryId::new(owner, repo);
        let events = events.unwrap_or_else(|| {
            functions::webhook::DEFAULT_WEBHOOK_EVENTS
                .iter()
                .map(|event| event.to_string())
                .collect()
        });
        text_result(
            functions::webhook::create_webhook(&self.github_client, &repository_id, &url, &events)
                .await,
        )
    }

    #[tool(description = "List webhooks in a GitHub repository.")]
    async fn list_webhooks(
        &self,
        #[tool(param)]
        #[schemars(description = "Repository owner")]
        owner: String,
        #[tool(param)]
        #[schemars(description = "Repository name")]
        repo: String,
    ) -> Result<CallToolResult, McpError> {
        let repository_id = RepositoryId::new(owner, repo);
        text_result(functions::webhook::list_webhooks(&self.github_client, &repository_id).await)
    }

    #[tool(description = "Delete a webhook in a GitHub repository.")]
    async fn delete_webhook(
        &self,
        #[tool(param)]
        #[schemars(description = "Repository owner")]
        owner: String,
        #[tool(param)]
        #[schemars(description = "Repository name")]
        repo: String,
        #[tool(param)]
        #[schemars(description = "Webhook ID")]
        webhook_id: u64,
    ) -> Result<CallToolResult, McpError> {
        let repository_id = RepositoryId::new(owner, repo);
        text_result(
            functions::webhook::delete_webhook(&self.github_client, &repository_id, webhook_id)
                .await,
        )
    }

    #[tool(
        description = "List the 10 most recent GitHub Actions workflow runs of a repository, optionally for one workflow."
    )]
    async fn list_workflow_runs(
        &self,
        #[tool(param)]
        #[schemars(description = "Repository owner")]
        owner: String,
        #[tool(param)]
        #[schemars(description = "Repository name")]
        repo: String,
        #[tool(param)]
        #[schemars(
            description = "Optional workflow ID or workflow file name to filter by. Examples: '161335', 'ci.yml'"
        )]
        workflow_id: Option<String>,
    ) -> Result<CallToolResult, McpError> {
        let repository_id = RepositoryId::new(owner, repo);
        text_result(
            functions::workflow::list_workflow_runs(
                &self.github_client,
                &repository_id,
                workflow_id.as_deref(),
            )
            .await,
        )
    }
}

#[tool(tool_box)]
impl ServerHandler for GitHubTools {
    /// Provides information about this MCP server
    fn get_info(&self) -> ServerInfo {
        let auth_status = if self.github_client.config().is_authenticated() {
            "Authenticated with GitHub token"
        } else {
            "Not authenticated (rate limits apply, write operations will fail)"
        };

        let instructions = format!(
            r#"GitHub Toolbox MCP Server - {}

## Overview
Proxies GitHub REST API operations. Every tool returns plain text. When GitHub rejects a call, the text starts with "Unable to <action>:" followed by GitHub's message.

## Available Tools

- search_repositories: search repositories (`query`, `per_page`, `page`)
- create_repository / delete_repository
- create_issue
- list_branches / create_branch / delete_branch
- get_file_contents / create_or_update_file
- create_pull_request / list_pull_requests / merge_pull_request
- create_webhook / list_webhooks / delete_webhook
- list_workflow_runs

Examples:
```json
{{"name": "search_repositories", "arguments": {{"query": "language:rust stars:>1000", "per_page": 5}}}}
{{"name": "create_branch", "arguments": {{"owner": "octocat", "repo": "hello", "branch_name": "feature/login", "source_branch": "main"}}}}
{{"name": "create_or_update_file", "arguments": {{"owner": "octocat", "repo": "hello", "path": "docs/notes.md", "content": "hello", "message": "Add notes"}}}}
```
"#,
            auth_status
        );

        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(instructions),
        }
    }
}
