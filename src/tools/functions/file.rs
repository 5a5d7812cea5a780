use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};

use crate::formatter::{JsonView, file_text};
use crate::github::{ApiResult, GitHubClient, RequestDescriptor};
use crate::tools::error::ToolError;
use crate::types::{Branch, RepositoryId};

use super::{ListShape, render_entity, render_list};

const WRITE_ACTION: &str = "create/update file";

pub fn get_contents_request(
    repository_id: &RepositoryId,
    path: &str,
    branch: &Branch,
) -> RequestDescriptor {
    RequestDescriptor::get(repository_id.contents_path(path)).with_query("ref", branch.as_str())
}

/// Shows a file (metadata and decoded text) or the entries of a directory.
pub async fn get_file_contents(
    github_client: &GitHubClient,
    repository_id: &RepositoryId,
    path: &str,
    branch: &Branch,
) -> String {
    let result = github_client
        .execute(get_contents_request(repository_id, path, branch))
        .await;

    match result {
        Ok(entries @ Value::Array(_)) => render_list(
            Ok(entries),
            "get file contents",
            ListShape::Array,
            &format!("Directory '{}' is empty.", path),
            None,
            file_text,
        ),
        other => render_entity(other, "get file contents", file_text),
    }
}

/// Payload for `PUT /repos/{o}/{r}/contents/{path}`.
///
/// `existing_sha` must be the blob sha of the file being replaced; it is left
/// out entirely when the file is being created.
pub fn file_write_payload(
    content: &str,
    message: &str,
    branch: &Branch,
    existing_sha: Option<&str>,
) -> Value {
    let mut payload = json!({
        "message": message,
        "content": STANDARD.encode(content.as_bytes()),
        "branch": branch.as_str(),
    });

    if let (Some(sha), Some(fields)) = (existing_sha, payload.as_object_mut()) {
        fields.insert("sha".to_string(), Value::String(sha.to_string()));
    }

    payload
}

/// Interprets the read step of a file write.
///
/// `404` means the file does not exist yet. Any other failure stops the write,
/// since it would otherwise be reported as a fresh create while the real cause
/// (bad credentials, rate limiting, network) goes unseen.
pub fn existing_file_sha(lookup: ApiResult) -> Result<Option<String>, ToolError> {
    match lookup {
        Ok(existing) => Ok(JsonView::new(&existing)
            .opt_str("sha")
            .map(str::to_string)),
        Err(failure) if failure.is_not_found() => Ok(None),
        Err(failure) => Err(ToolError::api(WRITE_ACTION, failure)),
    }
}

/// Reads the current blob sha at `path` on `branch`, then writes the new content.
pub async fn put_file_contents(
    github_client: &GitHubClient,
    repository_id: &RepositoryId,
    path: &str,
    content: &str,
    message: &str,
    branch: &Branch,
) -> Result<Value, ToolError> {
    let lookup = github_client
        .execute(get_contents_request(repository_id, path, branch))
        .await;
    let existing_sha = existing_file_sha(lookup)?;

    tracing::debug!(
        "Writing {} on {} of {} ({})",
        path,
        branch,
        repository_id,
        if existing_sha.is_some() { "update" } else { "create" }
    );

    let payload = file_write_payload(content, message, branch, existing_sha.as_deref());
    github_client
        .execute(RequestDescriptor::put(repository_id.contents_path(path)).with_body(payload))
        .await
        .map_err(|failure| ToolError::api(WRITE_ACTION, failure))
}

pub async fn create_or_update_file(
    github_client: &GitHubClient,
    repository_id: &RepositoryId,
    path: &str,
    content: &str,
    message: &str,
    branch: &Branch,
) -> String {
    match put_file_contents(github_client, repository_id, path, content, message, branch).await {
        Ok(_) => format!(
            "File '{}' created/updated successfully in branch '{}'.",
            path, branch
        ),
        Err(e) => e.into(),
    }
}
