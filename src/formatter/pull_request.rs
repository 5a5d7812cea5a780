use serde_json::Value;

use crate::formatter::JsonView;

pub fn pull_request_text(pull_request: &Value) -> String {
    let view = JsonView::new(pull_request);
    format!(
        "PR #{}\nTitle: {}\nState: {}\nURL: {}",
        view.text_or("number", "Unknown"),
        view.text_or("title", "No title"),
        view.text_or("state", "Unknown"),
        view.text_or("html_url", "No URL"),
    )
}
