use serde_json::Value;

use crate::formatter::JsonView;

pub fn webhook_text(webhook: &Value) -> String {
    let view = JsonView::new(webhook);
    format!(
        "ID: {}\nType: {}\nEvents: {}\nURL: {}\nActive: {}",
        view.text_or("id", "Unknown"),
        view.text_or("type", "Unknown"),
        view.str_list("events").join(", "),
        view.field("config").text_or("url", "No URL"),
        view.bool_or("active", false),
    )
}
