use serde_json::{Map, Value, json};

use crate::formatter::pull_request_text;
use crate::github::{GitHubClient, RequestDescriptor};
use crate::types::{Branch, Pagination, RepositoryId};

use super::{ListShape, render_confirmation, render_entity, render_list};

pub const DEFAULT_PULL_REQUEST_STATE: &str = "open";

pub fn create_pull_request_request(
    repository_id: &RepositoryId,
    title: &str,
    head: &Branch,
    base: &Branch,
    body: &str,
) -> RequestDescriptor {
    RequestDescriptor::post(repository_id.api_path_with("pulls")).with_body(json!({
        "title": title,
        "head": head.as_str(),
        "base": base.as_str(),
        "body": body,
    }))
}

pub async fn create_pull_request(
    github_client: &GitHubClient,
    repository_id: &RepositoryId,
    title: &str,
    head: &Branch,
    base: &Branch,
    body: &str,
) -> String {
    let result = github_client
        .execute(create_pull_request_request(
            repository_id,
            title,
            head,
            base,
            body,
        ))
        .await;
    render_entity(result, "create pull request", pull_request_text)
}

/// `state` is forwarded verbatim (`open`, `closed`, `all`).
pub fn list_pull_requests_request(
    repository_id: &RepositoryId,
    state: &str,
    pagination: Pagination,
) -> RequestDescriptor {
    pagination.apply(
        RequestDescriptor::get(repository_id.api_path_with("pulls")).with_query("state", state),
    )
}

pub async fn list_pull_requests(
    github_client: &GitHubClient,
    repository_id: &RepositoryId,
    state: &str,
    pagination: Pagination,
) -> String {
    let result = github_client
        .execute(list_pull_requests_request(repository_id, state, pagination))
        .await;
    render_list(
        result,
        "list pull requests",
        ListShape::Array,
        &format!("No {} pull requests found.", state),
        None,
        pull_request_text,
    )
}

/// Builds `PUT /repos/{o}/{r}/pulls/{n}/merge`; an empty title is left out so
/// GitHub picks its default merge commit title.
pub fn merge_pull_request_request(
    repository_id: &RepositoryId,
    pull_number: u64,
    commit_title: &str,
) -> RequestDescriptor {
    let mut payload = Map::new();
    if !commit_title.is_empty() {
        payload.insert(
            "commit_title".to_string(),
            Value::String(commit_title.to_string()),
        );
    }

    RequestDescriptor::put(repository_id.api_path_with(&format!("pulls/{}/merge", pull_number)))
        .with_body(Value::Object(payload))
}

pub async fn merge_pull_request(
    github_client: &GitHubClient,
    repository_id: &RepositoryId,
    pull_number: u64,
    commit_title: &str,
) -> String {
    let result = github_client
        .execute(merge_pull_request_request(
            repository_id,
            pull_number,
            commit_title,
        ))
        .await;
    render_confirmation(
        result,
        "merge pull request",
        format!("Pull request #{} merged successfully.", pull_number),
    )
}
