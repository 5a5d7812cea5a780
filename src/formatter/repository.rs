use serde_json::Value;

use crate::formatter::JsonView;

/// Name, description, star count and URL of a repository payload.
pub fn repository_text(repository: &Value) -> String {
    let view = JsonView::new(repository);
    format!(
        "Name: {}\nDescription: {}\nStars: {}\nURL: {}",
        view.text_or("full_name", "Unknown"),
        view.text_or("description", "No description"),
        view.u64_or("stargazers_count", 0),
        view.text_or("html_url", "No URL"),
    )
}
