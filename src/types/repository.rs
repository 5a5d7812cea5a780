//! Repository identifiers used to build GitHub REST paths

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::github::request::{encode_path_segments, repo_path};

/// Branch used when a tool argument names none
pub const DEFAULT_BRANCH: &str = "main";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Branch(pub String);

impl Branch {
    pub fn new<T: Into<String>>(branch: T) -> Self {
        Self(branch.into())
    }

    /// The named branch, or [`DEFAULT_BRANCH`] when none is given
    pub fn or_default(branch: Option<String>) -> Self {
        Self(branch.unwrap_or_else(|| DEFAULT_BRANCH.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fully-qualified ref name, e.g. `refs/heads/main`
    pub fn ref_name(&self) -> String {
        format!("refs/heads/{}", self.0)
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owner name wrapper for type safety
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, PartialOrd, Ord,
)]
pub struct Owner(pub String);

impl Owner {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Owner {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Owner {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Repository name wrapper for type safety
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, PartialOrd, Ord,
)]
pub struct RepositoryName(pub String);

impl RepositoryName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RepositoryName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RepositoryName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// `owner/repository` pair addressed by most REST endpoints
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, PartialOrd, Ord,
)]
pub struct RepositoryId {
    pub owner: Owner,
    pub repository_name: RepositoryName,
}

impl RepositoryId {
    pub fn new<O: Into<Owner>, R: Into<RepositoryName>>(owner: O, repository_name: R) -> Self {
        Self {
            owner: owner.into(),
            repository_name: repository_name.into(),
        }
    }

    /// `/repos/{owner}/{repo}`
    pub fn api_path(&self) -> String {
        repo_path(self.owner.as_str(), self.repository_name.as_str())
    }

    /// `/repos/{owner}/{repo}/{suffix}`
    pub fn api_path_with(&self, suffix: &str) -> String {
        format!("{}/{}", self.api_path(), suffix.trim_start_matches('/'))
    }

    /// `/repos/{owner}/{repo}/git/refs/heads/{branch}`
    pub fn branch_ref_path(&self, branch: &Branch) -> String {
        self.api_path_with(&format!(
            "git/refs/heads/{}",
            encode_path_segments(branch.as_str())
        ))
    }

    /// `/repos/{owner}/{repo}/contents/{path}`
    pub fn contents_path(&self, file_path: &str) -> String {
        self.api_path_with(&format!("contents/{}", encode_path_segments(file_path)))
    }
}

impl std::fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repository_name)
    }
}
