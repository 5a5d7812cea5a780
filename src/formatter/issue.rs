use serde_json::Value;

use crate::formatter::JsonView;

pub fn issue_text(issue: &Value) -> String {
    let view = JsonView::new(issue);
    format!(
        "Issue #{}\nTitle: {}\nState: {}\nURL: {}",
        view.text_or("number", "Unknown"),
        view.text_or("title", "No title"),
        view.text_or("state", "Unknown"),
        view.text_or("html_url", "No URL"),
    )
}
