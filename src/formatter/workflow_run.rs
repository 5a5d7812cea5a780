use serde_json::Value;

use crate::formatter::JsonView;

pub fn workflow_run_text(run: &Value) -> String {
    let view = JsonView::new(run);
    format!(
        "Run #{}\nName: {}\nStatus: {}\nConclusion: {}\nURL: {}",
        view.text_or("id", "Unknown"),
        view.text_or("name", "Unknown"),
        view.text_or("status", "Unknown"),
        // null until the run completes
        view.text_or("conclusion", "Pending"),
        view.text_or("html_url", "No URL"),
    )
}
