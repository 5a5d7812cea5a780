//! Plain-text projections of GitHub REST payloads
//!
//! Every projection reads its fields through [`JsonView`], so each access names
//! its own fallback and a missing or `null` field never leaks into the output
//! as `null`.

pub mod branch;
pub mod file;
pub mod issue;
pub mod pull_request;
pub mod repository;
pub mod webhook;
pub mod workflow_run;

use serde_json::Value;

pub use branch::*;
pub use file::*;
pub use issue::*;
pub use pull_request::*;
pub use repository::*;
pub use webhook::*;
pub use workflow_run::*;

/// Separator placed between entities of a list response
pub const ENTITY_SEPARATOR: &str = "\n---\n";

/// Read-only view over an arbitrary JSON value.
///
/// Absent fields, `null` fields and lookups on non-objects all behave the
/// same way: the caller's fallback is returned.
#[derive(Debug, Clone, Copy)]
pub struct JsonView<'a>(Option<&'a Value>);

impl<'a> JsonView<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self(Some(value))
    }

    fn present(&self, key: &str) -> Option<&'a Value> {
        self.0?.get(key).filter(|value| !value.is_null())
    }

    /// Nested object view; an absent field yields a view where every lookup falls back.
    pub fn field(&self, key: &str) -> JsonView<'a> {
        JsonView(self.present(key))
    }

    pub fn opt_str(&self, key: &str) -> Option<&'a str> {
        self.present(key).and_then(Value::as_str)
    }

    /// Display text of a scalar field.
    ///
    /// Strings are used verbatim, numbers and booleans are rendered with their
    /// JSON spelling.
    pub fn text_or(&self, key: &str, fallback: &str) -> String {
        match self.present(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(other) => other.to_string(),
            None => fallback.to_string(),
        }
    }

    pub fn u64_or(&self, key: &str, fallback: u64) -> u64 {
        self.present(key)
            .and_then(Value::as_u64)
            .unwrap_or(fallback)
    }

    pub fn bool_or(&self, key: &str, fallback: bool) -> bool {
        self.present(key)
            .and_then(Value::as_bool)
            .unwrap_or(fallback)
    }

    /// String elements of an array field; non-string elements are skipped.
    pub fn str_list(&self, key: &str) -> Vec<&'a str> {
        self.present(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// Joins projected entities with [`ENTITY_SEPARATOR`].
pub fn join_entities<I>(entities: I) -> String
where
    I: IntoIterator<Item = String>,
{
    entities
        .into_iter()
        .collect::<Vec<_>>()
        .join(ENTITY_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_view_fallbacks() {
        let value = json!({
            "name": "main",
            "count": 12,
            "flag": true,
            "missing": null,
            "nested": {"sha": "abc"},
            "events": ["push", 3, "pull_request"]
        });
        let view = JsonView::new(&value);

        assert_eq!(view.text_or("name", "Unknown"), "main");
        assert_eq!(view.text_or("count", "Unknown"), "12");
        assert_eq!(view.text_or("flag", "Unknown"), "true");
        assert_eq!(view.text_or("missing", "Unknown"), "Unknown");
        assert_eq!(view.text_or("absent", "Unknown"), "Unknown");
        assert_eq!(view.field("nested").text_or("sha", "Unknown"), "abc");
        assert_eq!(view.field("absent").text_or("sha", "Unknown"), "Unknown");
        assert_eq!(view.u64_or("count", 0), 12);
        assert_eq!(view.u64_or("name", 0), 0);
        assert!(view.bool_or("flag", false));
        assert!(!view.bool_or("missing", false));
        assert_eq!(view.str_list("events"), vec!["push", "pull_request"]);
        assert!(view.str_list("absent").is_empty());
    }

    #[test]
    fn test_json_view_on_non_object() {
        let value = json!([1, 2]);
        let view = JsonView::new(&value);
        assert_eq!(view.text_or("name", "Unknown"), "Unknown");
        assert_eq!(view.opt_str("name"), None);
    }

    #[test]
    fn test_join_entities() {
        assert_eq!(join_entities(vec!["a".to_string()]), "a");
        assert_eq!(
            join_entities(vec!["a".to_string(), "b".to_string()]),
            "a\n---\nb"
        );
    }
}
