//! Tool handler implementations organized by functionality
//!
//! Every handler follows the same shape: typed arguments are turned into a
//! [`RequestDescriptor`](crate::github::RequestDescriptor), the descriptor is
//! executed, and the resulting [`ApiResult`] is rendered with one of the
//! helpers below. Handlers always return a `String`; failures become
//! `"Unable to <action>: <message>"`.

pub mod branch;
pub mod file;
pub mod issue;
pub mod pull_request;
pub mod repository;
pub mod search;
pub mod webhook;
pub mod workflow;

use serde_json::Value;

use crate::formatter::join_entities;
use crate::github::{ApiFailure, ApiResult};

/// Where the elements of a list response live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListShape {
    /// The body itself is a JSON array
    Array,
    /// The body is an object whose named field is the array (`items`, `workflow_runs`)
    Field(&'static str),
}

pub fn failure_message(action: &str, failure: &ApiFailure) -> String {
    tracing::warn!("Unable to {} ({:?}): {}", action, failure.kind, failure);
    format!("Unable to {}: {}", action, failure)
}

/// Renders a single-entity response with `project`.
pub fn render_entity<F>(result: ApiResult, action: &str, project: F) -> String
where
    F: Fn(&Value) -> String,
{
    match result {
        Ok(value) => project(&value),
        Err(failure) => failure_message(action, &failure),
    }
}

/// Renders a response that carries no useful body (deletes, merges, ref creation).
pub fn render_confirmation(result: ApiResult, action: &str, confirmation: String) -> String {
    match result {
        Ok(_) => confirmation,
        Err(failure) => failure_message(action, &failure),
    }
}

/// Renders a list response, projecting each element and joining them with the separator.
///
/// An empty collection yields `empty_message`; at most `limit` elements are shown when set.
pub fn render_list<F>(
    result: ApiResult,
    action: &str,
    shape: ListShape,
    empty_message: &str,
    limit: Option<usize>,
    project: F,
) -> String
where
    F: Fn(&Value) -> String,
{
    let value = match result {
        Ok(value) => value,
        Err(failure) => return failure_message(action, &failure),
    };

    let items = match list_items(&value, shape) {
        Ok(items) => items,
        Err(failure) => return failure_message(action, &failure),
    };

    if items.is_empty() {
        return empty_message.to_string();
    }

    let limit = limit.unwrap_or(items.len());
    join_entities(items.iter().take(limit).map(project))
}

/// Locates the element array of a list response.
///
/// A body without the expected shape is classified as a decode failure.
pub fn list_items(value: &Value, shape: ListShape) -> Result<&Vec<Value>, ApiFailure> {
    let items = match shape {
        ListShape::Array => value.as_array(),
        ListShape::Field(field) => value.get(field).and_then(Value::as_array),
    };

    items.ok_or_else(|| match shape {
        ListShape::Array => {
            ApiFailure::decode("Unexpected response from GitHub: expected a JSON array")
        }
        ListShape::Field(field) => ApiFailure::decode(format!(
            "Unexpected response from GitHub: missing '{}' array",
            field
        )),
    })
}
