use std::time::Duration;

/// Default GitHub REST API endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Versioned media type pinned on every request
pub const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// Product identifier sent as `User-Agent`
pub const DEFAULT_USER_AGENT: &str = concat!("github-toolbox-mcp/", env!("CARGO_PKG_VERSION"));

/// Upper bound for a whole request (connect + read)
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable settings for [`crate::github::GitHubClient`].
///
/// Built once at startup and handed to the client; nothing reads the
/// environment after that.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub api_base_url: String,
    pub token: Option<String>,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl GitHubConfig {
    pub fn new(token: Option<String>) -> Self {
        Self::default().with_token(token)
    }

    /// Empty tokens are treated as "not configured".
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn with_api_base_url<T: Into<String>>(mut self, api_base_url: T) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
