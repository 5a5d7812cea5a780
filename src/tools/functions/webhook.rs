use serde_json::json;

use crate::formatter::webhook_text;
use crate::github::{GitHubClient, RequestDescriptor};
use crate::types::RepositoryId;

use super::{ListShape, render_confirmation, render_entity, render_list};

pub const DEFAULT_WEBHOOK_EVENTS: &[&str] = &["push"];

/// Builds `POST /repos/{o}/{r}/hooks` for an active JSON webhook.
pub fn create_webhook_request(
    repository_id: &RepositoryId,
    url: &str,
    events: &[String],
) -> RequestDescriptor {
    RequestDescriptor::post(repository_id.api_path_with("hooks")).with_body(json!({
        "config": {
            "url": url,
            "content_type": "json",
        },
        "events": events,
        "active": true,
    }))
}

pub async fn create_webhook(
    github_client: &GitHubClient,
    repository_id: &RepositoryId,
    url: &str,
    events: &[String],
) -> String {
    let result = github_client
        .execute(create_webhook_request(repository_id, url, events))
        .await;
    render_entity(result, "create webhook", webhook_text)
}

pub async fn list_webhooks(github_client: &GitHubClient, repository_id: &RepositoryId) -> String {
    let result = github_client
        .execute(RequestDescriptor::get(repository_id.api_path_with("hooks")))
        .await;
    render_list(
        result,
        "list webhooks",
        ListShape::Array,
        "No webhooks found.",
        None,
        webhook_text,
    )
}

pub async fn delete_webhook(
    github_client: &GitHubClient,
    repository_id: &RepositoryId,
    webhook_id: u64,
) -> String {
    let result = github_client
        .execute(RequestDescriptor::delete(
            repository_id.api_path_with(&format!("hooks/{}", webhook_id)),
        ))
        .await;
    render_confirmation(
        result,
        "delete webhook",
        format!("Webhook {} deleted successfully.", webhook_id),
    )
}
