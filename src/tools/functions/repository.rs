use serde_json::json;

use crate::formatter::repository_text;
use crate::github::{GitHubClient, RequestDescriptor};
use crate::types::RepositoryId;

use super::{render_confirmation, render_entity};

/// Builds `POST /user/repos`. The repository is initialized with a README so
/// that it has a default branch to work on right away.
pub fn create_repository_request(
    name: &str,
    description: &str,
    private: bool,
) -> RequestDescriptor {
    RequestDescriptor::post("/user/repos").with_body(json!({
        "name": name,
        "description": description,
        "private": private,
        "auto_init": true,
    }))
}

pub async fn create_repository(
    github_client: &GitHubClient,
    name: &str,
    description: &str,
    private: bool,
) -> String {
    let result = github_client
        .execute(create_repository_request(name, description, private))
        .await;
    render_entity(result, "create repository", repository_text)
}

pub async fn delete_repository(
    github_client: &GitHubClient,
    repository_id: &RepositoryId,
) -> String {
    let result = github_client
        .execute(RequestDescriptor::delete(repository_id.api_path()))
        .await;
    render_confirmation(
        result,
        "delete repository",
        format!("Repository {} deleted successfully.", repository_id),
    )
}
