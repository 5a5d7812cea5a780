//! Error types for multi-step tool handlers
//!
//! Single-request handlers render an [`ApiFailure`] directly. Handlers that chain
//! requests use [`ToolError`] to stop early and carry the reason up to the
//! rendering step.

use std::fmt;

use crate::github::ApiFailure;

/// Reasons a tool invocation ends without the expected result
#[derive(Debug, Clone, PartialEq)]
pub enum ToolError {
    /// A GitHub call failed while performing `action`
    Api {
        action: &'static str,
        failure: ApiFailure,
    },

    /// The source branch ref resolved, but carried no `object.sha`
    SourceBranchShaMissing,
}

impl ToolError {
    pub fn api(action: &'static str, failure: ApiFailure) -> Self {
        ToolError::Api { action, failure }
    }

    /// The classified upstream failure, when there is one
    pub fn failure(&self) -> Option<&ApiFailure> {
        match self {
            ToolError::Api { failure, .. } => Some(failure),
            ToolError::SourceBranchShaMissing => None,
        }
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolError::Api { action, failure } => write!(f, "Unable to {}: {}", action, failure),
            ToolError::SourceBranchShaMissing => write!(f, "Unable to get source branch SHA."),
        }
    }
}

impl std::error::Error for ToolError {}

/// Convert from ToolError to a plain String for the MCP tool function result
impl From<ToolError> for String {
    fn from(error: ToolError) -> Self {
        tracing::warn!("Tool invocation failed: {:?}", error);
        error.to_string()
    }
}
