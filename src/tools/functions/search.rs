use crate::formatter::repository_text;
use crate::github::{GitHubClient, RequestDescriptor};
use crate::types::Pagination;

use super::{ListShape, render_list};

/// Builds `GET /search/repositories?q=..&per_page=..&page=..`.
pub fn search_repositories_request(query: &str, pagination: Pagination) -> RequestDescriptor {
    pagination.apply(RequestDescriptor::get("/search/repositories").with_query("q", query))
}

/// Searches repositories using GitHub search syntax (e.g. `language:rust stars:>1000`).
pub async fn search_repositories(
    github_client: &GitHubClient,
    query: &str,
    pagination: Pagination,
) -> String {
    let result = github_client
        .execute(search_repositories_request(query, pagination))
        .await;

    render_list(
        result,
        "search repositories",
        ListShape::Field("items"),
        "No repositories found for this query.",
        None,
        repository_text,
    )
}
