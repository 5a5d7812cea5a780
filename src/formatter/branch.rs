use serde_json::Value;

use crate::formatter::JsonView;

/// Branch name, head commit and web URL (`_links.html`).
pub fn branch_text(branch: &Value) -> String {
    let view = JsonView::new(branch);
    format!(
        "Name: {}\nSHA: {}\nURL: {}",
        view.text_or("name", "Unknown"),
        view.field("commit").text_or("sha", "Unknown"),
        view.field("_links").text_or("html", "No URL"),
    )
}
