use serde_json::json;

use crate::formatter::issue_text;
use crate::github::{GitHubClient, RequestDescriptor};
use crate::types::RepositoryId;

use super::render_entity;

pub fn create_issue_request(
    repository_id: &RepositoryId,
    title: &str,
    body: &str,
) -> RequestDescriptor {
    RequestDescriptor::post(repository_id.api_path_with("issues")).with_body(json!({
        "title": title,
        "body": body,
    }))
}

pub async fn create_issue(
    github_client: &GitHubClient,
    repository_id: &RepositoryId,
    title: &str,
    body: &str,
) -> String {
    let result = github_client
        .execute(create_issue_request(repository_id, title, body))
        .await;
    render_entity(result, "create issue", issue_text)
}
