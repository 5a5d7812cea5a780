use serde_json::{Value, json};

use crate::formatter::{JsonView, branch_text};
use crate::github::{GitHubClient, RequestDescriptor};
use crate::tools::error::ToolError;
use crate::types::{Branch, Pagination, RepositoryId};

use super::{ListShape, render_confirmation, render_list};

pub async fn list_branches(
    github_client: &GitHubClient,
    repository_id: &RepositoryId,
    pagination: Pagination,
) -> String {
    let result = github_client
        .execute(pagination.apply(RequestDescriptor::get(
            repository_id.api_path_with("branches"),
        )))
        .await;
    render_list(
        result,
        "list branches",
        ListShape::Array,
        "No branches found.",
        None,
        branch_text,
    )
}

/// Commit a ref points to (`object.sha` of a git ref payload).
pub fn ref_commit_sha(reference: &Value) -> Option<String> {
    JsonView::new(reference)
        .field("object")
        .opt_str("sha")
        .filter(|sha| !sha.is_empty())
        .map(str::to_string)
}

pub fn create_reference_request(
    repository_id: &RepositoryId,
    branch: &Branch,
    sha: &str,
) -> RequestDescriptor {
    RequestDescriptor::post(repository_id.api_path_with("git/refs")).with_body(json!({
        "ref": branch.ref_name(),
        "sha": sha,
    }))
}

/// Resolves `source_branch` to a commit, then creates `refs/heads/{branch_name}` at it.
///
/// The second request is only sent once the first has produced a commit sha.
pub async fn create_branch_from_source(
    github_client: &GitHubClient,
    repository_id: &RepositoryId,
    branch_name: &Branch,
    source_branch: &Branch,
) -> Result<Value, ToolError> {
    let source_ref = github_client
        .execute(RequestDescriptor::get(
            repository_id.branch_ref_path(source_branch),
        ))
        .await
        .map_err(|failure| ToolError::api("get source branch", failure))?;

    let sha = ref_commit_sha(&source_ref).ok_or(ToolError::SourceBranchShaMissing)?;
    tracing::debug!("Resolved {} of {} to {}", source_branch, repository_id, sha);

    github_client
        .execute(create_reference_request(repository_id, branch_name, &sha))
        .await
        .map_err(|failure| ToolError::api("create branch", failure))
}

pub async fn create_branch(
    github_client: &GitHubClient,
    repository_id: &RepositoryId,
    branch_name: &Branch,
    source_branch: &Branch,
) -> String {
    match create_branch_from_source(github_client, repository_id, branch_name, source_branch).await
    {
        Ok(_) => format!(
            "Branch '{}' created successfully from '{}'.",
            branch_name, source_branch
        ),
        Err(e) => e.into(),
    }
}

pub async fn delete_branch(
    github_client: &GitHubClient,
    repository_id: &RepositoryId,
    branch_name: &Branch,
) -> String {
    let result = github_client
        .execute(RequestDescriptor::delete(
            repository_id.branch_ref_path(branch_name),
        ))
        .await;
    render_confirmation(
        result,
        "delete branch",
        format!("Branch '{}' deleted successfully.", branch_name),
    )
}
