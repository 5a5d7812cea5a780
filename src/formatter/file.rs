use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::formatter::JsonView;

/// Metadata of a repository content entry, followed by its text when the
/// payload carries base64 content that decodes to UTF-8.
pub fn file_text(file: &Value) -> String {
    let view = JsonView::new(file);
    let mut content = format!(
        "Path: {}\nType: {}\nSHA: {}\nSize: {}\nURL: {}",
        view.text_or("path", "Unknown"),
        view.text_or("type", "file"),
        view.text_or("sha", "Unknown"),
        view.u64_or("size", 0),
        view.text_or("html_url", "No URL"),
    );

    if let Some(text) = decoded_content(file) {
        content.push_str("\nContent:\n");
        content.push_str(&text);
    }

    content
}

/// Decodes the `content` field of a contents payload.
///
/// GitHub wraps the base64 text at 60 columns, so whitespace is stripped first.
pub fn decoded_content(file: &Value) -> Option<String> {
    let view = JsonView::new(file);
    if view.opt_str("encoding") != Some("base64") {
        return None;
    }

    let encoded: String = view
        .opt_str("content")?
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = STANDARD.decode(encoded).ok()?;
    String::from_utf8(bytes).ok()
}
