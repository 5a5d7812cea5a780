/// Classification of a failed GitHub API call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request never produced an HTTP response (DNS, connect, TLS, timeout, body read)
    Transport,
    /// GitHub answered with a non-2xx status code
    Http {
        /// Numeric HTTP status returned by GitHub
        status: u16,
    },
    /// A 2xx body could not be decoded into the expected JSON shape
    Decode,
}

/// A classified failure produced by [`crate::github::GitHubClient::execute`].
///
/// The message is what ends up in the user-facing `"Unable to ...: <message>"`
/// text, while the kind stays available for programmatic callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiFailure {
    pub fn transport<T: Into<String>>(message: T) -> Self {
        Self {
            kind: ApiErrorKind::Transport,
            message: message.into(),
        }
    }

    pub fn http<T: Into<String>>(status: u16, message: T) -> Self {
        Self {
            kind: ApiErrorKind::Http { status },
            message: message.into(),
        }
    }

    pub fn decode<T: Into<String>>(message: T) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            message: message.into(),
        }
    }

    /// Builds a transport failure from a reqwest error.
    pub fn from_reqwest_error(error: reqwest::Error) -> Self {
        tracing::debug!("Raw reqwest error: {:?}", error);

        let message = if error.is_timeout() {
            format!("GitHub API request timed out: {}", error)
        } else if error.is_connect() {
            format!("GitHub API connection failed: {}", error)
        } else {
            format!("GitHub API request failed: {}", error)
        };
        tracing::warn!("Transport error: {}", message);
        Self::transport(message)
    }

    /// Builds an HTTP failure from a non-2xx status and the raw response body.
    ///
    /// GitHub error bodies look like `{"message": "...", "documentation_url": "..."}`.
    /// When the body is JSON carrying a `message` string that text is used verbatim,
    /// otherwise a generic description is derived from the status.
    pub fn from_status(status: reqwest::StatusCode, body: &[u8]) -> Self {
        let upstream_message = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .filter(|message| !message.is_empty());

        let message = upstream_message.unwrap_or_else(|| match status.canonical_reason() {
            Some(reason) => format!("GitHub API returned status {} {}", status.as_u16(), reason),
            None => format!("GitHub API returned status {}", status.as_u16()),
        });

        match status.as_u16() {
            400..=499 => tracing::error!("Client error ({}): {}", status.as_u16(), message),
            _ => tracing::warn!("Server error ({}): {}", status.as_u16(), message),
        }

        Self::http(status.as_u16(), message)
    }

    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ApiErrorKind::Http { status } => Some(status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether repeating the same call could plausibly succeed.
    ///
    /// Nothing in this crate retries; the split is exposed for callers that want to.
    pub fn is_retryable(&self) -> bool {
        match self.kind {
            ApiErrorKind::Transport => true,
            ApiErrorKind::Http { status } => status == 429 || (500..=599).contains(&status),
            ApiErrorKind::Decode => false,
        }
    }
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiFailure {}
