use crate::github::config::{GITHUB_ACCEPT_HEADER, GitHubConfig};
use crate::github::error::ApiFailure;
use crate::github::request::RequestDescriptor;

use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Outcome of a single GitHub API call: the decoded JSON body or a classified failure
pub type ApiResult = std::result::Result<Value, ApiFailure>;

/// Request executor for the GitHub REST API.
///
/// Cloning is cheap: the underlying `reqwest::Client` and the configuration are shared.
#[derive(Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    config: Arc<GitHubConfig>,
}

impl GitHubClient {
    /// Creates a client whose headers and timeout are fixed for its whole lifetime.
    ///
    /// # Arguments
    ///
    /// * `config` - Base URL, optional bearer token, user agent and request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The token or user agent contains characters that are not valid in an HTTP header
    /// - The underlying HTTP client cannot be built (e.g. TLS backend initialization)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use github_toolbox::github::{GitHubClient, GitHubConfig};
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let client = GitHubClient::new(GitHubConfig::new(Some("ghp_xxxxxxxxxxxx".to_string())))?;
    /// assert!(client.config().is_authenticated());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT_HEADER));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).context("Invalid User-Agent value")?,
        );

        if let Some(token) = &config.token {
            let mut authorization = HeaderValue::from_str(&format!("Bearer {}", token))
                .context("GitHub token contains characters not allowed in an HTTP header")?;
            authorization.set_sensitive(true);
            headers.insert(AUTHORIZATION, authorization);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .context("Failed to build GitHub client")?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &GitHubConfig {
        &self.config
    }

    /// Issues exactly one HTTP request and classifies the outcome.
    ///
    /// This never fails outside of the returned [`ApiResult`]:
    ///
    /// - Network-level errors (DNS, connect, TLS, timeout, body read) become
    ///   [`ApiErrorKind::Transport`](crate::github::ApiErrorKind::Transport)
    /// - Non-2xx responses become
    ///   [`ApiErrorKind::Http`](crate::github::ApiErrorKind::Http), carrying
    ///   GitHub's `message` when the body has one
    /// - A 2xx response with an empty body is `Ok` with an empty JSON object
    /// - A 2xx response whose body is not JSON becomes
    ///   [`ApiErrorKind::Decode`](crate::github::ApiErrorKind::Decode)
    ///
    /// No retry is attempted, since many operations (issue creation, webhook
    /// creation) are not idempotent.
    pub async fn execute(&self, descriptor: RequestDescriptor) -> ApiResult {
        let url = descriptor.url(&self.config.api_base_url);
        debug!("Starting GitHub request {} {}", descriptor.method, url);

        let start_time = std::time::Instant::now();

        let mut request = self.client.request(descriptor.method.into(), &url);
        if !descriptor.query.is_empty() {
            request = request.query(&descriptor.query);
        }
        if let Some(body) = &descriptor.body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(ApiFailure::from_reqwest_error)?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(ApiFailure::from_reqwest_error)?;

        info!(
            "GitHub request {} {} completed with status {} in {:?}",
            descriptor.method,
            url,
            status.as_u16(),
            start_time.elapsed()
        );

        if !status.is_success() {
            return Err(ApiFailure::from_status(status, &body));
        }

        decode_success_body(&body)
    }
}

fn decode_success_body(body: &[u8]) -> ApiResult {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    serde_json::from_slice(body).map_err(|e| {
        error!("GitHub returned a success status with a non-JSON body: {}", e);
        ApiFailure::decode(format!("Invalid JSON in GitHub API response: {}", e))
    })
}
